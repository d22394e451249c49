//! Submission log entry data structures
//!
//! Every record creation is logged with a timestamp, the list it was added
//! to, and a snapshot of the submitted record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The record lists that appear in the submission log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Emi,
    Lending,
    Split,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Emi => write!(f, "EMI"),
            EntityType::Lending => write!(f, "Lending"),
            EntityType::Split => write!(f, "Split expense"),
        }
    }
}

/// A single submission log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the record was submitted (UTC)
    pub timestamp: DateTime<Utc>,

    /// Which list the record was added to
    pub entity_type: EntityType,

    /// ID assigned to the record
    pub entity_id: String,

    /// Short human-readable summary (e.g. date and description)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// JSON snapshot of the submitted record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a log entry for a submitted record
    pub fn submission<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: Option<String>,
        record: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            entity_type,
            entity_id: entity_id.into(),
            summary,
            record: serde_json::to_value(record).ok(),
        }
    }
}
