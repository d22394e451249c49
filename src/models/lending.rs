//! Lending and borrowing model
//!
//! Records money lent to or borrowed from another person, with a due date
//! and a pending/repaid status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::LendingId;
use super::money::Money;
use super::DomainRecord;
use crate::filter::Searchable;

/// Direction of a lending entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LendingKind {
    /// Money given out; the other person owes you
    Lent,
    /// Money taken in; you owe the other person
    Borrowed,
}

impl LendingKind {
    /// The canonical name used for filtering and export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lent => "Lent",
            Self::Borrowed => "Borrowed",
        }
    }

    /// Look up a kind by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Lent" => Some(Self::Lent),
            "Borrowed" => Some(Self::Borrowed),
            _ => None,
        }
    }
}

impl fmt::Display for LendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a lending entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LendingStatus {
    /// The obligation is still outstanding
    #[default]
    Pending,
    /// The obligation has been settled
    Repaid,
}

impl LendingStatus {
    /// The canonical name used for filtering and export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Repaid => "Repaid",
        }
    }

    /// Look up a status by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Pending" => Some(Self::Pending),
            "Repaid" => Some(Self::Repaid),
            _ => None,
        }
    }
}

impl fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lending or borrowing record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LendingEntry {
    /// Unique identifier within the lending list
    pub id: LendingId,

    /// Date the money changed hands
    pub date: NaiveDate,

    /// The other party
    pub person: String,

    /// Amount lent or borrowed
    pub amount: Money,

    /// Direction of the entry
    pub kind: LendingKind,

    /// When repayment is due, if agreed
    pub due_date: Option<NaiveDate>,

    /// Whether the obligation is still outstanding
    #[serde(default)]
    pub status: LendingStatus,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl LendingEntry {
    /// Create a new lending entry with an unassigned id
    pub fn new(
        date: NaiveDate,
        person: impl Into<String>,
        amount: Money,
        kind: LendingKind,
        due_date: Option<NaiveDate>,
        status: LendingStatus,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: LendingId::new(0),
            date,
            person: person.into(),
            amount,
            kind,
            due_date,
            status,
            notes: notes.into(),
        }
    }

    /// Check if the obligation is still outstanding
    pub fn is_pending(&self) -> bool {
        self.status == LendingStatus::Pending
    }
}

impl DomainRecord for LendingEntry {
    fn id_value(&self) -> u64 {
        self.id.value()
    }

    fn assign_id(&mut self, raw: u64) {
        self.id = LendingId::new(raw);
    }

    fn validate(&self) -> Result<(), String> {
        if self.person.trim().is_empty() {
            return Err("person must not be empty".into());
        }
        if self.amount.is_negative() {
            return Err("amount must not be negative".into());
        }
        Ok(())
    }
}

impl Searchable for LendingEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.person, &self.notes]
    }
}
