//! Lending service
//!
//! Filtering and creation for the lending/borrowing list.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::FintrackResult;
use crate::filter;
use crate::models::{LendingEntry, LendingKind, LendingStatus, Money};
use crate::storage::Store;

/// Options for filtering lending entries
#[derive(Debug, Clone, Default)]
pub struct LendingFilter {
    /// Kind constraint (Lent/Borrowed); None is the "All" wildcard
    pub kind: Option<String>,
    /// Status constraint (Pending/Repaid); None is the "All" wildcard
    pub status: Option<String>,
    /// Free-text query matched against person and notes
    pub query: String,
}

impl LendingFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to a kind
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
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

    /// Check whether an entry satisfies every active constraint
    pub fn matches(&self, entry: &LendingEntry) -> bool {
        filter::selection_matches(self.kind.as_deref(), entry.kind.as_str())
            && filter::selection_matches(self.status.as_deref(), entry.status.as_str())
            && filter::search_matches(entry, &self.query)
    }
}

/// Input for creating a new lending entry
#[derive(Debug, Clone)]
pub struct CreateLendingInput {
    pub date: NaiveDate,
    pub person: String,
    pub amount: Money,
    pub kind: LendingKind,
    pub due_date: Option<NaiveDate>,
    pub status: LendingStatus,
    pub notes: String,
}

/// Service for the lending list
pub struct LendingService<'a> {
    store: &'a Store,
}

impl<'a> LendingService<'a> {
    /// Create a new lending service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List entries matching the filter, in store order
    pub fn list(&self, filter_opts: &LendingFilter) -> FintrackResult<Vec<LendingEntry>> {
        let all = self.store.lending.get_all()?;
        Ok(filter::apply(&all, |e| filter_opts.matches(e))
            .into_iter()
            .cloned()
            .collect())
    }

    /// Create a new lending entry: validate, append, persist, and log
    pub fn create(&self, input: CreateLendingInput) -> FintrackResult<LendingEntry> {
        let entry = LendingEntry::new(
            input.date,
            input.person.trim(),
            input.amount,
            input.kind,
            input.due_date,
            input.status,
            input.notes.trim(),
        );

        let stored = self.store.lending.append(entry)?;
        self.store.lending.save()?;

        self.store.log_submission(
            EntityType::Lending,
            stored.id.to_string(),
            Some(format!("{} {} {}", stored.kind, stored.amount, stored.person)),
            &stored,
        )?;

        Ok(stored)
    }
}
