//! Core data models for fintrack-cli
//!
//! This module contains the data structures for the four tracked lists:
//! expenses, EMIs, lending/borrowing, and split expenses.

pub mod emi;
pub mod expense;
pub mod ids;
pub mod lending;
pub mod money;
pub mod split;

pub use emi::{Emi, EmiStatus};
pub use expense::{Expense, ExpenseCategory};
pub use ids::{EmiId, ExpenseId, LendingId, SplitId};
pub use lending::{LendingEntry, LendingKind, LendingStatus};
pub use money::Money;
pub use split::{SplitExpense, SplitStatus, YOU};

/// Implemented by records held in a domain list
///
/// Ids are plain integers unique within a list; the store assigns the next
/// free id on append and rejects duplicates. Validation enforces the
/// record-level invariants before anything is persisted.
pub trait DomainRecord {
    /// The raw integer id
    fn id_value(&self) -> u64;

    /// Assign the id chosen by the store on append
    fn assign_id(&mut self, raw: u64);

    /// Check the record-level invariants
    fn validate(&self) -> Result<(), String>;
}
