//! EMI service
//!
//! Filtering and creation for the EMI list.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::FintrackResult;
use crate::filter;
use crate::models::{Emi, EmiStatus, Money};
use crate::storage::Store;

/// Options for filtering EMIs
#[derive(Debug, Clone, Default)]
pub struct EmiFilter {
    /// Status constraint; None is the "All" wildcard
    pub status: Option<String>,
    /// Free-text query matched against loan type and lender
    pub query: String,
}

impl EmiFilter {
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

    /// Check whether an EMI satisfies every active constraint
    pub fn matches(&self, emi: &Emi) -> bool {
        filter::selection_matches(self.status.as_deref(), emi.status.as_str())
            && filter::search_matches(emi, &self.query)
    }
}

/// Input for creating a new EMI
#[derive(Debug, Clone)]
pub struct CreateEmiInput {
    pub loan_type: String,
    pub lender: String,
    pub total_amount: Money,
    pub emi_amount: Money,
    pub tenure: u32,
    pub paid_months: u32,
    pub next_due_date: Option<NaiveDate>,
    pub status: EmiStatus,
}

/// Service for the EMI list
pub struct EmiService<'a> {
    store: &'a Store,
}

impl<'a> EmiService<'a> {
    /// Create a new EMI service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List EMIs matching the filter, in store order
    pub fn list(&self, filter_opts: &EmiFilter) -> FintrackResult<Vec<Emi>> {
        let all = self.store.emis.get_all()?;
        Ok(filter::apply(&all, |e| filter_opts.matches(e))
            .into_iter()
            .cloned()
            .collect())
    }

    /// Create a new EMI: validate, append, persist, and log
    pub fn create(&self, input: CreateEmiInput) -> FintrackResult<Emi> {
        let emi = Emi::new(
            input.loan_type.trim(),
            input.lender.trim(),
            input.total_amount,
            input.emi_amount,
            input.tenure,
            input.paid_months,
            input.next_due_date,
            input.status,
        );

        let stored = self.store.emis.append(emi)?;
        self.store.emis.save()?;

        self.store.log_submission(
            EntityType::Emi,
            stored.id.to_string(),
            Some(format!("{} via {}", stored.loan_type, stored.lender)),
            &stored,
        )?;

        Ok(stored)
    }
}
