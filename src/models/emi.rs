//! EMI (equated monthly installment) model
//!
//! Tracks an installment loan: the total borrowed, the fixed monthly
//! payment, and how far through the tenure the loan is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EmiId;
use super::money::Money;
use super::DomainRecord;
use crate::filter::Searchable;

/// Status of an EMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EmiStatus {
    /// Installments are still being paid
    #[default]
    Active,
    /// All installments have been paid
    Completed,
}

impl EmiStatus {
    /// The canonical name used for filtering and export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Look up a status by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Active" => Some(Self::Active),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for EmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An installment loan record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emi {
    /// Unique identifier within the EMI list
    pub id: EmiId,

    /// Kind of loan (e.g. "Home Loan", "Car Loan")
    pub loan_type: String,

    /// Lending institution
    pub lender: String,

    /// Total loan amount
    pub total_amount: Money,

    /// Fixed monthly installment
    pub emi_amount: Money,

    /// Loan tenure in months
    pub tenure: u32,

    /// Number of installments paid so far
    pub paid_months: u32,

    /// Next installment due date; None once the loan is completed
    pub next_due_date: Option<NaiveDate>,

    /// Loan status
    #[serde(default)]
    pub status: EmiStatus,
}

impl Emi {
    /// Create a new EMI with an unassigned id
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        loan_type: impl Into<String>,
        lender: impl Into<String>,
        total_amount: Money,
        emi_amount: Money,
        tenure: u32,
        paid_months: u32,
        next_due_date: Option<NaiveDate>,
        status: EmiStatus,
    ) -> Self {
        Self {
            id: EmiId::new(0),
            loan_type: loan_type.into(),
            lender: lender.into(),
            total_amount,
            emi_amount,
            tenure,
            paid_months,
            next_due_date,
            status,
        }
    }

    /// Fraction of the tenure that has been paid, in [0, 1]
    ///
    /// A zero tenure is defined as zero progress rather than a division error.
    pub fn progress_ratio(&self) -> f64 {
        if self.tenure == 0 {
            0.0
        } else {
            f64::from(self.paid_months) / f64::from(self.tenure)
        }
    }

    /// Progress as a percentage, for display
    pub fn progress_percent(&self) -> f64 {
        self.progress_ratio() * 100.0
    }

    /// Check if installments are still being paid
    pub fn is_active(&self) -> bool {
        self.status == EmiStatus::Active
    }
}

impl DomainRecord for Emi {
    fn id_value(&self) -> u64 {
        self.id.value()
    }

    fn assign_id(&mut self, raw: u64) {
        self.id = EmiId::new(raw);
    }

    fn validate(&self) -> Result<(), String> {
        if self.loan_type.trim().is_empty() {
            return Err("loan type must not be empty".into());
        }
        if self.lender.trim().is_empty() {
            return Err("lender must not be empty".into());
        }
        if self.total_amount.is_negative() || self.emi_amount.is_negative() {
            return Err("amounts must not be negative".into());
        }
        if self.paid_months > self.tenure {
            return Err(format!(
                "paid months ({}) cannot exceed tenure ({})",
                self.paid_months, self.tenure
            ));
        }
        Ok(())
    }
}

impl Searchable for Emi {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.loan_type, &self.lender]
    }
}
