//! Split expense model
//!
//! A shared cost divided among several participants, tracking who paid the
//! bill, who it is split with, and your own share.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SplitId;
use super::money::Money;
use super::DomainRecord;
use crate::filter::Searchable;

/// The participant name that stands for the account owner
pub const YOU: &str = "You";

/// Status of a split expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SplitStatus {
    /// Shares are still owed
    #[default]
    Pending,
    /// All shares have been settled up
    Settled,
}

impl SplitStatus {
    /// The canonical name used for filtering and export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Settled => "Settled",
        }
    }

    /// Look up a status by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Pending" => Some(Self::Pending),
            "Settled" => Some(Self::Settled),
            _ => None,
        }
    }
}

impl fmt::Display for SplitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shared expense split among participants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitExpense {
    /// Unique identifier within the split-expense list
    pub id: SplitId,

    /// Date of the shared expense
    pub date: NaiveDate,

    /// Free-form description
    pub description: String,

    /// Full bill amount
    pub total_amount: Money,

    /// Who paid the bill (the `YOU` sentinel for yourself)
    pub paid_by: String,

    /// Ordered participant names the cost is split with
    pub split_with: Vec<String>,

    /// Your own share of the bill
    pub your_share: Money,

    /// Settlement status
    #[serde(default)]
    pub status: SplitStatus,
}

impl SplitExpense {
    /// Create a new split expense with an unassigned id
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        total_amount: Money,
        paid_by: impl Into<String>,
        split_with: Vec<String>,
        your_share: Money,
        status: SplitStatus,
    ) -> Self {
        Self {
            id: SplitId::new(0),
            date,
            description: description.into(),
            total_amount,
            paid_by: paid_by.into(),
            split_with,
            your_share,
            status,
        }
    }

    /// Check if you paid the bill
    pub fn paid_by_you(&self) -> bool {
        self.paid_by == YOU
    }

    /// Check if shares are still owed
    pub fn is_pending(&self) -> bool {
        self.status == SplitStatus::Pending
    }

    /// The outstanding amount owed to the payer by everyone else
    pub fn others_share(&self) -> Money {
        self.total_amount - self.your_share
    }
}

impl DomainRecord for SplitExpense {
    fn id_value(&self) -> u64 {
        self.id.value()
    }

    fn assign_id(&mut self, raw: u64) {
        self.id = SplitId::new(raw);
    }

    fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("description must not be empty".into());
        }
        if self.paid_by.trim().is_empty() {
            return Err("payer must not be empty".into());
        }
        if self.total_amount.is_negative() || self.your_share.is_negative() {
            return Err("amounts must not be negative".into());
        }
        if self.your_share > self.total_amount {
            return Err("your share cannot exceed the total amount".into());
        }
        Ok(())
    }
}

impl Searchable for SplitExpense {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dinner() -> SplitExpense {
        SplitExpense::new(
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            "Dinner at Restaurant",
            Money::from_units(2400),
            YOU,
            vec!["John".into(), "Sarah".into()],
            Money::from_units(800),
            SplitStatus::Pending,
        )
    }

    #[test]
    fn test_paid_by_you() {
        let mut s = dinner();
        assert!(s.paid_by_you());
        s.paid_by = "Sarah".into();
        assert!(!s.paid_by_you());
    }

    #[test]
    fn test_others_share() {
        assert_eq!(dinner().others_share(), Money::from_units(1600));
    }

    #[test]
    fn test_validate_share_bound() {
        let mut s = dinner();
        s.your_share = Money::from_units(2500);
        assert!(DomainRecord::validate(&s).is_err());

        s.your_share = Money::from_units(2400);
        assert!(DomainRecord::validate(&s).is_ok());
    }

    #[test]
    fn test_status_names() {
        assert_eq!(SplitStatus::from_name("Settled"), Some(SplitStatus::Settled));
        assert_eq!(SplitStatus::from_name("Repaid"), None);
    }

    #[test]
    fn test_split_with_preserves_order() {
        let s = dinner();
        assert_eq!(s.split_with, vec!["John".to_string(), "Sarah".to_string()]);
    }
}
