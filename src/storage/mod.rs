//! Storage layer for fintrack-cli
//!
//! One JSON file per record list with atomic writes, plus the submission
//! log hook used by the services when records are created.

pub mod file_io;
pub mod records;
pub mod seed;

pub use file_io::{read_json, write_json_atomic};
pub use records::RecordFile;
pub use seed::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::{Emi, Expense, LendingEntry, SplitExpense};

/// Main storage coordinator that provides access to all record lists
pub struct Store {
    paths: FintrackPaths,
    audit: AuditLogger,
    pub expenses: RecordFile<Expense>,
    pub emis: RecordFile<Emi>,
    pub lending: RecordFile<LendingEntry>,
    pub splits: RecordFile<SplitExpense>,
}

impl Store {
    /// Create a new Store instance
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            expenses: RecordFile::new("Expense", paths.expenses_file()),
            emis: RecordFile::new("EMI", paths.emis_file()),
            lending: RecordFile::new("Lending entry", paths.lending_file()),
            splits: RecordFile::new("Split expense", paths.splits_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Get the submission log
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all lists from disk
    pub fn load_all(&self) -> Result<(), FintrackError> {
        self.expenses.load()?;
        self.emis.load()?;
        self.lending.load()?;
        self.splits.load()?;
        Ok(())
    }

    /// Save all lists to disk
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.expenses.save()?;
        self.emis.save()?;
        self.lending.save()?;
        self.splits.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (data files exist)
    pub fn is_initialized(&self) -> bool {
        self.paths.expenses_file().exists()
    }

    /// Write a submission log entry for a newly created record
    pub fn log_submission<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: Option<String>,
        record: &T,
    ) -> Result<(), FintrackError> {
        self.audit
            .log(&AuditEntry::submission(entity_type, entity_id, summary, record))
    }
}
