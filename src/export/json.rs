//! JSON export
//!
//! Exports all four record lists to a single schema-versioned JSON snapshot.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Emi, Expense, LendingEntry, SplitExpense};
use crate::storage::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses
    pub expenses: Vec<Expense>,

    /// All EMIs
    pub emis: Vec<Emi>,

    /// All lending entries
    pub lending: Vec<LendingEntry>,

    /// All split expenses
    pub split_expenses: Vec<SplitExpense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Total number of EMIs
    pub emi_count: usize,

    /// Total number of lending entries
    pub lending_count: usize,

    /// Total number of split expenses
    pub split_count: usize,

    /// Earliest expense date
    pub earliest_expense: Option<String>,

    /// Latest expense date
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from the store
    pub fn from_store(store: &Store) -> FintrackResult<Self> {
        let expenses = store.expenses.get_all()?;
        let emis = store.emis.get_all()?;
        let lending = store.lending.get_all()?;
        let split_expenses = store.splits.get_all()?;

        let earliest_expense = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            emi_count: emis.len(),
            lending_count: lending.len(),
            split_count: split_expenses.len(),
            earliest_expense,
            latest_expense,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            emis,
            lending,
            split_expenses,
            metadata,
        })
    }
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(
    store: &Store,
    writer: &mut W,
    pretty: bool,
) -> FintrackResult<()> {
    let export = FullExport::from_store(store)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    } else {
        serde_json::to_writer(writer, &export)
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    Ok(())
}
