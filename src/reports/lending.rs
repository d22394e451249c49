//! Lending summary
//!
//! Reduces a (filtered) lending list into the to-receive / to-pay / net
//! figures shown in the summary cards. Only Pending entries count; a Repaid
//! entry contributes nothing.

use crate::models::{LendingEntry, LendingKind, Money};

/// Summary of outstanding lending obligations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LendingSummary {
    /// Pending amounts lent out (owed to you)
    pub to_receive: Money,
    /// Pending amounts borrowed (owed by you)
    pub to_pay: Money,
}

impl LendingSummary {
    /// Compute the summary over a filtered view
    pub fn compute(entries: &[LendingEntry]) -> Self {
        let mut summary = Self::default();

        for entry in entries {
            if !entry.is_pending() {
                continue;
            }
            match entry.kind {
                LendingKind::Lent => summary.to_receive += entry.amount,
                LendingKind::Borrowed => summary.to_pay += entry.amount,
            }
        }

        summary
    }

    /// Overall balance: positive when more is owed to you than by you
    pub fn net_balance(&self) -> Money {
        self.to_receive - self.to_pay
    }
}
