//! User settings for fintrack-cli
//!
//! Manages user preferences: currency symbol and date format for display,
//! plus a schema version for forward migration support.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;

/// User settings for fintrack-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                FintrackError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FintrackError::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
