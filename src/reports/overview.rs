//! Overview report
//!
//! Rolls the four lists up into the dashboard figures: total spending,
//! monthly EMI outgo, outstanding split settlements, and the lending
//! balance.

use crate::error::FintrackResult;
use crate::models::Money;
use crate::reports::{LendingSummary, SplitSummary};
use crate::storage::Store;

/// Dashboard overview across all four lists
#[derive(Debug, Clone)]
pub struct OverviewReport {
    /// Sum of all expenses
    pub total_expenses: Money,
    /// Number of expense records
    pub expense_count: usize,
    /// Number of EMIs still being paid
    pub active_emis: usize,
    /// Combined monthly installment across active EMIs
    pub monthly_emi_outgo: Money,
    /// Number of split expenses awaiting settlement
    pub pending_splits: usize,
    /// Outstanding split-expense balance
    pub split_summary: SplitSummary,
    /// Outstanding lending balance
    pub lending_summary: LendingSummary,
}

impl OverviewReport {
    /// Generate the overview from the full record store
    pub fn generate(store: &Store) -> FintrackResult<Self> {
        let expenses = store.expenses.get_all()?;
        let emis = store.emis.get_all()?;
        let lending = store.lending.get_all()?;
        let splits = store.splits.get_all()?;

        let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();

        let active: Vec<_> = emis.iter().filter(|e| e.is_active()).collect();
        let monthly_emi_outgo: Money = active.iter().map(|e| e.emi_amount).sum();

        let pending_splits = splits.iter().filter(|s| s.is_pending()).count();

        Ok(Self {
            total_expenses,
            expense_count: expenses.len(),
            active_emis: active.len(),
            monthly_emi_outgo,
            pending_splits,
            split_summary: SplitSummary::compute(&splits),
            lending_summary: LendingSummary::compute(&lending),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Overview\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!(
            "{:<28} {:>18}\n",
            format!("Total Expenses ({})", self.expense_count),
            self.total_expenses.to_string()
        ));
        output.push_str(&format!(
            "{:<28} {:>18}\n",
            format!("Monthly EMI Outgo ({} active)", self.active_emis),
            self.monthly_emi_outgo.to_string()
        ));
        output.push_str(&format!(
            "{:<28} {:>18}\n",
            format!("Pending Split Settlements ({})", self.pending_splits),
            self.split_summary.net_balance().to_string()
        ));
        output.push_str(&format!(
            "{:<28} {:>18}\n",
            "Lending Net Balance",
            self.lending_summary.net_balance().to_string()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::storage::seed;
    use tempfile::TempDir;

    fn seeded_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();
        seed::initialize_storage(&store).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_generate_from_sample_data() {
        let (_tmp, store) = seeded_store();
        let report = OverviewReport::generate(&store).unwrap();

        // 2500 + 1500 + 800 + 3200 + 4500
        assert_eq!(report.total_expenses, Money::from_units(12500));
        assert_eq!(report.expense_count, 5);

        // Home Loan + Car Loan active; Personal Loan completed
        assert_eq!(report.active_emis, 2);
        assert_eq!(report.monthly_emi_outgo, Money::from_units(40_000));

        assert_eq!(report.pending_splits, 2);
        assert_eq!(
            report.lending_summary.net_balance(),
            Money::from_units(3000)
        );
    }

    #[test]
    fn test_format_terminal_mentions_figures() {
        let (_tmp, store) = seeded_store();
        let report = OverviewReport::generate(&store).unwrap();
        let text = report.format_terminal();

        assert!(text.contains("₹12,500"));
        assert!(text.contains("₹40,000"));
        assert!(text.contains("Lending Net Balance"));
    }
}
