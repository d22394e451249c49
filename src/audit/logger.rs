//! Append-only submission log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

use super::entry::AuditEntry;

/// Writes submission entries to the log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one submission.
pub struct AuditLogger {
    /// Path to the log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &AuditEntry) -> FintrackResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open submission log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| FintrackError::Json(format!("Failed to serialize log entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FintrackError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| FintrackError::Io(format!("Failed to flush submission log: {}", e)))?;

        Ok(())
    }

    /// Read all entries in chronological order (oldest first)
    pub fn read_all(&self) -> FintrackResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open submission log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                FintrackError::Io(format!("Failed to read log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                FintrackError::Json(format!(
                    "Failed to parse log entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> FintrackResult<Vec<AuditEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Number of entries in the log
    pub fn entry_count(&self) -> FintrackResult<usize> {
        Ok(self.read_all()?.len())
    }
}
