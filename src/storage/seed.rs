//! Sample data seeding
//!
//! `fintrack init` seeds the data directory with a small sample dataset per
//! list so every view has something to show before the user adds their own
//! records.

use chrono::NaiveDate;

use crate::error::FintrackResult;
use crate::models::{
    Emi, EmiStatus, Expense, ExpenseCategory, LendingEntry, LendingKind, LendingStatus, Money,
    SplitExpense, SplitStatus, YOU,
};

use super::Store;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All sample dates are valid calendar dates
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

/// Sample expense list
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new(
            date(2024, 3, 20),
            ExpenseCategory::Groceries,
            "Weekly groceries from Supermart",
            Money::from_units(2500),
            "Credit Card",
        ),
        Expense::new(
            date(2024, 3, 19),
            ExpenseCategory::Transportation,
            "Monthly metro pass",
            Money::from_units(1500),
            "Debit Card",
        ),
        Expense::new(
            date(2024, 3, 18),
            ExpenseCategory::Entertainment,
            "Movie tickets",
            Money::from_units(800),
            "UPI",
        ),
        Expense::new(
            date(2024, 3, 17),
            ExpenseCategory::Utilities,
            "Electricity bill",
            Money::from_units(3200),
            "Net Banking",
        ),
        Expense::new(
            date(2024, 3, 16),
            ExpenseCategory::Shopping,
            "New clothes",
            Money::from_units(4500),
            "Credit Card",
        ),
    ]
}

/// Sample EMI list
pub fn sample_emis() -> Vec<Emi> {
    vec![
        Emi::new(
            "Home Loan",
            "HDFC Bank",
            Money::from_units(2_500_000),
            Money::from_units(25_000),
            120,
            24,
            Some(date(2024, 4, 5)),
            EmiStatus::Active,
        ),
        Emi::new(
            "Car Loan",
            "ICICI Bank",
            Money::from_units(800_000),
            Money::from_units(15_000),
            60,
            36,
            Some(date(2024, 4, 10)),
            EmiStatus::Active,
        ),
        Emi::new(
            "Personal Loan",
            "SBI Bank",
            Money::from_units(500_000),
            Money::from_units(12_000),
            48,
            48,
            None,
            EmiStatus::Completed,
        ),
    ]
}

/// Sample lending list
pub fn sample_lending() -> Vec<LendingEntry> {
    vec![
        LendingEntry::new(
            date(2024, 3, 20),
            "John",
            Money::from_units(5000),
            LendingKind::Lent,
            Some(date(2024, 4, 20)),
            LendingStatus::Pending,
            "Emergency fund",
        ),
        LendingEntry::new(
            date(2024, 3, 15),
            "Sarah",
            Money::from_units(2000),
            LendingKind::Borrowed,
            Some(date(2024, 3, 30)),
            LendingStatus::Pending,
            "Lunch payment",
        ),
        LendingEntry::new(
            date(2024, 3, 10),
            "Mike",
            Money::from_units(3000),
            LendingKind::Lent,
            Some(date(2024, 3, 25)),
            LendingStatus::Repaid,
            "Movie tickets",
        ),
    ]
}

/// Sample split-expense list
pub fn sample_splits() -> Vec<SplitExpense> {
    vec![
        SplitExpense::new(
            date(2024, 3, 20),
            "Dinner at Restaurant",
            Money::from_units(2400),
            YOU,
            vec!["John".into(), "Sarah".into()],
            Money::from_units(800),
            SplitStatus::Pending,
        ),
        SplitExpense::new(
            date(2024, 3, 19),
            "Movie Night",
            Money::from_units(1500),
            "Sarah",
            vec![YOU.into(), "John".into()],
            Money::from_units(500),
            SplitStatus::Settled,
        ),
        SplitExpense::new(
            date(2024, 3, 18),
            "Groceries",
            Money::from_units(3600),
            YOU,
            vec!["Sarah".into(), "Mike".into(), "John".into()],
            Money::from_units(900),
            SplitStatus::Pending,
        ),
    ]
}

/// Seed every empty list with its sample data and persist
///
/// Lists that already hold records are left untouched, so re-running `init`
/// never clobbers user data.
pub fn initialize_storage(store: &Store) -> FintrackResult<()> {
    if store.expenses.is_empty()? {
        store.expenses.replace_all(with_ids(sample_expenses()))?;
    }
    if store.emis.is_empty()? {
        store.emis.replace_all(with_ids(sample_emis()))?;
    }
    if store.lending.is_empty()? {
        store.lending.replace_all(with_ids(sample_lending()))?;
    }
    if store.splits.is_empty()? {
        store.splits.replace_all(with_ids(sample_splits()))?;
    }

    store.save_all()
}

/// Assign sequential ids (1-based) to a freshly built sample list
fn with_ids<T: crate::models::DomainRecord>(mut records: Vec<T>) -> Vec<T> {
    for (i, record) in records.iter_mut().enumerate() {
        record.assign_id(i as u64 + 1);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    #[test]
    fn test_sample_data_is_valid() {
        use crate::models::DomainRecord;

        for e in sample_expenses() {
            assert!(e.validate().is_ok());
        }
        for e in sample_emis() {
            assert!(e.validate().is_ok());
        }
        for e in sample_lending() {
            assert!(e.validate().is_ok());
        }
        for e in sample_splits() {
            assert!(e.validate().is_ok());
        }
    }

    #[test]
    fn test_initialize_seeds_all_lists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();

        initialize_storage(&store).unwrap();

        assert_eq!(store.expenses.len().unwrap(), 5);
        assert_eq!(store.emis.len().unwrap(), 3);
        assert_eq!(store.lending.len().unwrap(), 3);
        assert_eq!(store.splits.len().unwrap(), 3);
    }

    #[test]
    fn test_initialize_does_not_clobber_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();

        initialize_storage(&store).unwrap();
        let extra = crate::models::Expense::new(
            date(2024, 4, 1),
            ExpenseCategory::Others,
            "Stationery",
            Money::from_units(150),
            "Cash",
        );
        store.expenses.append(extra).unwrap();

        initialize_storage(&store).unwrap();
        assert_eq!(store.expenses.len().unwrap(), 6);
    }

    #[test]
    fn test_sample_ids_are_sequential() {
        let seeded = with_ids(sample_lending());
        use crate::models::DomainRecord;
        let ids: Vec<u64> = seeded.iter().map(|r| r.id_value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
