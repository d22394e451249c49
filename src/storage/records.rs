//! Generic record-list repository
//!
//! One JSON file per domain list. The in-memory list keeps file order, which
//! is the order every filtered view and export preserves. The four lists
//! share this one repository type instead of four parallel copies.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::FintrackError;
use crate::models::DomainRecord;

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of a record list
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListData<T> {
    records: Vec<T>,
}

impl<T> Default for ListData<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

/// Repository for one domain record list
pub struct RecordFile<T> {
    /// Display name used in error messages
    entity_type: &'static str,
    path: PathBuf,
    data: RwLock<Vec<T>>,
}

impl<T> RecordFile<T>
where
    T: DomainRecord + Clone + Serialize + DeserializeOwned,
{
    /// Create a new repository backed by the given file
    pub fn new(entity_type: &'static str, path: PathBuf) -> Self {
        Self {
            entity_type,
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load the list from disk, replacing the in-memory contents
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: ListData<T> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.records;
        Ok(())
    }

    /// Save the list to disk in memory order
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ListData {
            records: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all records in list order
    pub fn get_all(&self) -> Result<Vec<T>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Number of records in the list
    pub fn len(&self) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> Result<bool, FintrackError> {
        Ok(self.len()? == 0)
    }

    /// Validate and append a record, assigning the next free id
    ///
    /// Returns the record as stored (with its assigned id).
    pub fn append(&self, mut record: T) -> Result<T, FintrackError> {
        record
            .validate()
            .map_err(FintrackError::Validation)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let next_id = data.iter().map(|r| r.id_value()).max().unwrap_or(0) + 1;
        record.assign_id(next_id);

        if data.iter().any(|r| r.id_value() == record.id_value()) {
            return Err(FintrackError::duplicate(
                self.entity_type,
                record.id_value().to_string(),
            ));
        }

        data.push(record.clone());
        Ok(record)
    }

    /// Insert pre-built records verbatim (used by seeding); ids must already
    /// be unique within the batch
    pub fn replace_all(&self, records: Vec<T>) -> Result<(), FintrackError> {
        for record in &records {
            record
                .validate()
                .map_err(FintrackError::Validation)?;
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = records;
        Ok(())
    }
}
