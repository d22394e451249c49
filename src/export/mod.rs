//! Export module for fintrack-cli
//!
//! Provides data export in multiple formats:
//! - CSV: the currently filtered view of any list (spreadsheet-compatible)
//! - JSON: machine-readable full database snapshot
//! - YAML: human-readable full database snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_csv, Column, ExportFile, Exportable, Quote};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
