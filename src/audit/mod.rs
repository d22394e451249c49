//! Submission logging for fintrack-cli
//!
//! Every record creation is appended to a JSONL log so there is a durable
//! trail of what was submitted and when.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType};
pub use logger::AuditLogger;
