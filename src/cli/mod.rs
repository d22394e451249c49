//! CLI command handlers
//!
//! One handler module per record list, bridging clap argument parsing to the
//! service, report, display, and export layers.

pub mod emi;
pub mod expense;
pub mod export;
pub mod lending;
pub mod report;
pub mod split;

pub use emi::{handle_emi_command, EmiCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use lending::{handle_lending_command, LendingCommands};
pub use report::handle_report_command;
pub use split::{handle_split_command, SplitCommands};

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::error::{FintrackError, FintrackResult};
use crate::export::ExportFile;
use crate::models::Money;

/// Today's calendar date, used for export filenames and date defaults
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| FintrackError::Validation(format!("Invalid date '{}': {}", s, e)))
}

/// Parse an amount argument (accepts "2500" or "₹2,500")
pub(crate) fn parse_amount(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| FintrackError::Validation(e.to_string()))
}

/// Write a built export to disk, honoring an explicit output path
///
/// Falls back to the export's suggested filename in the current directory.
pub(crate) fn write_export(file: &ExportFile, output: Option<PathBuf>) -> FintrackResult<PathBuf> {
    let path = output.unwrap_or_else(|| PathBuf::from(&file.filename));

    std::fs::write(&path, &file.contents).map_err(|e| {
        FintrackError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-20").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
        );
        assert!(parse_date("20-03-2024").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("₹2,500").unwrap(), Money::from_units(2500));
        assert!(parse_amount("lots").is_err());
    }

    #[test]
    fn test_write_export_uses_suggested_filename() {
        let dir = TempDir::new().unwrap();
        let file = ExportFile {
            filename: "expenses_2024-03-21.csv".into(),
            contents: "Date\n".into(),
        };

        let path = write_export(&file, Some(dir.path().join("out.csv"))).unwrap();
        assert_eq!(path, dir.path().join("out.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Date\n");
    }
}
