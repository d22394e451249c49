//! CSV import service
//!
//! Reads expense rows from a CSV file in the exporter's own column layout
//! (`Date,Category,Description,Amount,Payment Method`) and appends them to
//! the expense list. Round-trips the expense exporter's output.

use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Expense, ExpenseCategory, Money};
use crate::services::expense::{CreateExpenseInput, ExpenseService};
use crate::storage::Store;

/// Import expenses from a CSV file, returning the stored records
pub fn import_expenses_csv(store: &Store, path: &Path) -> FintrackResult<Vec<Expense>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| FintrackError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

    let service = ExpenseService::new(store);
    let mut imported = Vec::new();

    for (row_num, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| FintrackError::Import(format!("Failed to read row {}: {}", row_num + 2, e)))?;

        let input = parse_row(&record)
            .map_err(|e| FintrackError::Import(format!("Row {}: {}", row_num + 2, e)))?;

        imported.push(service.create(input)?);
    }

    Ok(imported)
}

/// Parse one CSV row into a create input
fn parse_row(record: &csv::StringRecord) -> Result<CreateExpenseInput, String> {
    if record.len() < 5 {
        return Err(format!("expected 5 columns, found {}", record.len()));
    }

    let date = NaiveDate::parse_from_str(record[0].trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", &record[0], e))?;

    let category = ExpenseCategory::from_name(record[1].trim())
        .ok_or_else(|| format!("unknown category '{}'", &record[1]))?;

    let amount =
        Money::parse(record[3].trim()).map_err(|e| format!("invalid amount: {}", e))?;

    Ok(CreateExpenseInput {
        date,
        category,
        description: record[2].trim().to_string(),
        amount,
        payment_method: record[4].trim().to_string(),
    })
}
