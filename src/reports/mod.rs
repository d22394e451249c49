//! Summary reports
//!
//! Aggregations over the record lists: the lending and split-expense
//! outstanding balances and the cross-list overview.

pub mod lending;
pub mod overview;
pub mod split;

pub use lending::LendingSummary;
pub use overview::OverviewReport;
pub use split::SplitSummary;
