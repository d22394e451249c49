//! fintrack-cli - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack application:
//! four record lists (expenses, EMIs, split expenses, lending/borrowing) with
//! filtered views, summary figures, and CSV export of the current view.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (the four record types and `Money`)
//! - `filter`: Predicate filtering shared by every list
//! - `storage`: JSON file storage layer with sample-data seeding
//! - `services`: Business logic layer (filters and record creation)
//! - `reports`: Summary aggregations (lending/split balances, overview)
//! - `export`: CSV view export and JSON/YAML full export
//! - `display`: Terminal table rendering
//! - `audit`: Append-only submission log
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FintrackPaths, settings::Settings};
//! use fintrack::storage::Store;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Store::new(paths)?;
//! store.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::FintrackError;
