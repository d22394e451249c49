//! Business logic layer
//!
//! One service per record list. Each service pairs a filter struct (the
//! current search and dropdown constraints, combined conjunctively) with a
//! validated create operation that appends to the store, persists, and
//! writes a submission log entry.

pub mod emi;
pub mod expense;
pub mod import;
pub mod lending;
pub mod split;

pub use emi::{CreateEmiInput, EmiFilter, EmiService};
pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
pub use import::import_expenses_csv;
pub use lending::{CreateLendingInput, LendingFilter, LendingService};
pub use split::{CreateSplitInput, SplitFilter, SplitService};
