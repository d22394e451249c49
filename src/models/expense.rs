//! Expense model
//!
//! A single spending record with a category drawn from a fixed vocabulary
//! and a free-form payment method.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::DomainRecord;
use crate::filter::Searchable;

/// Expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Groceries,
    Transportation,
    Entertainment,
    Utilities,
    Shopping,
    Healthcare,
    Others,
}

impl ExpenseCategory {
    /// All categories, in menu order
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Groceries,
        Self::Transportation,
        Self::Entertainment,
        Self::Utilities,
        Self::Shopping,
        Self::Healthcare,
        Self::Others,
    ];

    /// The canonical name used for filtering and export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Others => "Others",
        }
    }

    /// Look up a category by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the expense list
    pub id: ExpenseId,

    /// Date the expense occurred
    pub date: NaiveDate,

    /// Spending category
    pub category: ExpenseCategory,

    /// Free-form description
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// How the expense was paid (e.g. "Credit Card", "UPI")
    pub payment_method: String,
}

impl Expense {
    /// Create a new expense with an unassigned id
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        description: impl Into<String>,
        amount: Money,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(0),
            date,
            category,
            description: description.into(),
            amount,
            payment_method: payment_method.into(),
        }
    }
}

impl DomainRecord for Expense {
    fn id_value(&self) -> u64 {
        self.id.value()
    }

    fn assign_id(&mut self, raw: u64) {
        self.id = ExpenseId::new(raw);
    }

    fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("description must not be empty".into());
        }
        if self.amount.is_negative() {
            return Err("amount must not be negative".into());
        }
        Ok(())
    }
}

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.payment_method]
    }
}
