//! Split-expense summary
//!
//! Same pending/payer reduction as the lending summary: for each Pending
//! split that you paid, the others' outstanding shares are owed to you; for
//! each Pending split someone else paid, your share is owed by you. Settled
//! splits contribute nothing.

use crate::models::{Money, SplitExpense};

/// Summary of outstanding split-expense settlements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitSummary {
    /// Outstanding shares owed to you on bills you paid
    pub to_receive: Money,
    /// Your outstanding shares on bills others paid
    pub to_pay: Money,
}

impl SplitSummary {
    /// Compute the summary over a filtered view
    pub fn compute(splits: &[SplitExpense]) -> Self {
        let mut summary = Self::default();

        for split in splits {
            if !split.is_pending() {
                continue;
            }
            if split.paid_by_you() {
                summary.to_receive += split.others_share();
            } else {
                summary.to_pay += split.your_share;
            }
        }

        summary
    }

    /// Overall balance: positive when you are owed more than you owe
    pub fn net_balance(&self) -> Money {
        self.to_receive - self.to_pay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SplitStatus, YOU};
    use chrono::NaiveDate;

    fn split(
        total: i64,
        paid_by: &str,
        your_share: i64,
        status: SplitStatus,
    ) -> SplitExpense {
        SplitExpense::new(
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            "Shared bill",
            Money::from_units(total),
            paid_by,
            vec!["John".into()],
            Money::from_units(your_share),
            status,
        )
    }

    #[test]
    fn test_pending_you_paid_accrues_others_shares() {
        let splits = vec![split(2400, YOU, 800, SplitStatus::Pending)];
        let summary = SplitSummary::compute(&splits);

        assert_eq!(summary.to_receive, Money::from_units(1600));
        assert_eq!(summary.to_pay, Money::zero());
        assert_eq!(summary.net_balance(), Money::from_units(1600));
    }

    #[test]
    fn test_pending_other_paid_accrues_your_share() {
        let splits = vec![split(1500, "Sarah", 500, SplitStatus::Pending)];
        let summary = SplitSummary::compute(&splits);

        assert_eq!(summary.to_receive, Money::zero());
        assert_eq!(summary.to_pay, Money::from_units(500));
        assert_eq!(summary.net_balance(), Money::from_units(-500));
    }

    #[test]
    fn test_settled_contributes_nothing() {
        let splits = vec![
            split(2400, YOU, 800, SplitStatus::Settled),
            split(1500, "Sarah", 500, SplitStatus::Settled),
        ];
        let summary = SplitSummary::compute(&splits);
        assert_eq!(summary, SplitSummary::default());
    }

    #[test]
    fn test_mixed_sample_figures() {
        // Matches the seeded sample list: two pending bills you paid, one
        // settled bill paid by Sarah.
        let splits = vec![
            split(2400, YOU, 800, SplitStatus::Pending),
            split(1500, "Sarah", 500, SplitStatus::Settled),
            split(3600, YOU, 900, SplitStatus::Pending),
        ];
        let summary = SplitSummary::compute(&splits);

        assert_eq!(summary.to_receive, Money::from_units(1600 + 2700));
        assert_eq!(summary.to_pay, Money::zero());
        assert_eq!(summary.net_balance(), Money::from_units(4300));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(SplitSummary::compute(&[]), SplitSummary::default());
    }
}
