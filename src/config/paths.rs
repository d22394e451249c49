//! Path management for fintrack-cli
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fintrack-cli` or `~/.config/fintrack-cli`
//! 3. Windows: `%APPDATA%\fintrack-cli`

use std::path::PathBuf;

use crate::error::FintrackError;

/// Manages all paths used by fintrack-cli
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    /// Base directory for all fintrack-cli data
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Create a new FintrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = if let Ok(custom) = std::env::var("FINTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FintrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fintrack-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/fintrack-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the submission log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("submissions.log")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to emis.json
    pub fn emis_file(&self) -> PathBuf {
        self.data_dir().join("emis.json")
    }

    /// Get the path to lending.json
    pub fn lending_file(&self) -> PathBuf {
        self.data_dir().join("lending.json")
    }

    /// Get the path to split_expenses.json
    pub fn splits_file(&self) -> PathBuf {
        self.data_dir().join("split_expenses.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FintrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory for the current platform
fn resolve_default_path() -> Result<PathBuf, FintrackError> {
    #[cfg(windows)]
    {
        let appdata = std::env::var("APPDATA")
            .map_err(|_| FintrackError::Config("APPDATA environment variable not set".into()))?;
        Ok(PathBuf::from(appdata).join("fintrack-cli"))
    }

    #[cfg(not(windows))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return Ok(PathBuf::from(xdg).join("fintrack-cli"));
            }
        }

        let home = std::env::var("HOME")
            .map_err(|_| FintrackError::Config("HOME environment variable not set".into()))?;
        Ok(PathBuf::from(home).join(".config").join("fintrack-cli"))
    }
}
