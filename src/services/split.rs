//! Split-expense service
//!
//! Filtering and creation for the split-expense list.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::FintrackResult;
use crate::filter;
use crate::models::{Money, SplitExpense, SplitStatus};
use crate::storage::Store;

/// Options for filtering split expenses
#[derive(Debug, Clone, Default)]
pub struct SplitFilter {
    /// Status constraint (Pending/Settled); None is the "All" wildcard
    pub status: Option<String>,
    /// Free-text query matched against the description
    pub query: String,
}

impl SplitFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to a status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the free-text query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check whether a split expense satisfies every active constraint
    pub fn matches(&self, split: &SplitExpense) -> bool {
        filter::selection_matches(self.status.as_deref(), split.status.as_str())
            && filter::search_matches(split, &self.query)
    }
}

/// Input for creating a new split expense
#[derive(Debug, Clone)]
pub struct CreateSplitInput {
    pub date: NaiveDate,
    pub description: String,
    pub total_amount: Money,
    pub paid_by: String,
    pub split_with: Vec<String>,
    pub your_share: Money,
    pub status: SplitStatus,
}

/// Service for the split-expense list
pub struct SplitService<'a> {
    store: &'a Store,
}

impl<'a> SplitService<'a> {
    /// Create a new split-expense service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List split expenses matching the filter, in store order
    pub fn list(&self, filter_opts: &SplitFilter) -> FintrackResult<Vec<SplitExpense>> {
        let all = self.store.splits.get_all()?;
        Ok(filter::apply(&all, |s| filter_opts.matches(s))
            .into_iter()
            .cloned()
            .collect())
    }

    /// Create a new split expense: validate, append, persist, and log
    pub fn create(&self, input: CreateSplitInput) -> FintrackResult<SplitExpense> {
        let split = SplitExpense::new(
            input.date,
            input.description.trim(),
            input.total_amount,
            input.paid_by.trim(),
            input.split_with,
            input.your_share,
            input.status,
        );

        let stored = self.store.splits.append(split)?;
        self.store.splits.save()?;

        self.store.log_submission(
            EntityType::Split,
            stored.id.to_string(),
            Some(format!("{} {}", stored.date, stored.description)),
            &stored,
        )?;

        Ok(stored)
    }
}
