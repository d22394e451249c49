//! YAML export
//!
//! Exports the full database to YAML for a human-readable backup.

use crate::error::{FintrackError, FintrackResult};
use crate::export::json::FullExport;
use crate::storage::Store;
use std::io::Write;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(store: &Store, writer: &mut W) -> FintrackResult<()> {
    let export = FullExport::from_store(store)?;

    // Header comment block
    writeln!(writer, "# fintrack-cli Full Database Export")
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::storage::seed;
    use tempfile::TempDir;

    fn seeded_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();
        seed::initialize_storage(&store).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_yaml_export() {
        let (_tmp, store) = seeded_store();

        let mut output = Vec::new();
        export_full_yaml(&store, &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        assert!(yaml_string.contains("# fintrack-cli Full Database Export"));
        assert!(yaml_string.contains("Weekly groceries from Supermart"));
        assert!(yaml_string.contains("HDFC Bank"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let (_tmp, store) = seeded_store();

        let mut output = Vec::new();
        export_full_yaml(&store, &mut output).unwrap();
        let yaml_string = String::from_utf8(output).unwrap();

        let yaml_content: String = yaml_string
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: FullExport = serde_yaml::from_str(&yaml_content).unwrap();
        assert_eq!(parsed.split_expenses.len(), 3);
        assert_eq!(parsed.split_expenses[0].split_with, vec!["John", "Sarah"]);
    }
}
