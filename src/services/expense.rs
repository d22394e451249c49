//! Expense service
//!
//! Filtering and creation for the expense list.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::FintrackResult;
use crate::filter;
use crate::models::{Expense, ExpenseCategory, Money};
use crate::storage::Store;

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Category constraint; None is the "All Categories" wildcard.
    /// Compared against the category's canonical name, so a value outside
    /// the vocabulary matches no record.
    pub category: Option<String>,
    /// Free-text query matched against description and payment method
    pub query: String,
}

impl ExpenseFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to a category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the free-text query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check whether an expense satisfies every active constraint
    pub fn matches(&self, expense: &Expense) -> bool {
        filter::selection_matches(self.category.as_deref(), expense.category.as_str())
            && filter::search_matches(expense, &self.query)
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: Money,
    pub payment_method: String,
}

/// Service for the expense list
pub struct ExpenseService<'a> {
    store: &'a Store,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List expenses matching the filter, in store order
    pub fn list(&self, filter_opts: &ExpenseFilter) -> FintrackResult<Vec<Expense>> {
        let all = self.store.expenses.get_all()?;
        Ok(filter::apply(&all, |e| filter_opts.matches(e))
            .into_iter()
            .cloned()
            .collect())
    }

    /// Create a new expense: validate, append, persist, and log
    pub fn create(&self, input: CreateExpenseInput) -> FintrackResult<Expense> {
        let expense = Expense::new(
            input.date,
            input.category,
            input.description.trim(),
            input.amount,
            input.payment_method.trim(),
        );

        let stored = self.store.expenses.append(expense)?;
        self.store.expenses.save()?;

        self.store.log_submission(
            EntityType::Expense,
            stored.id.to_string(),
            Some(format!("{} {}", stored.date, stored.description)),
            &stored,
        )?;

        Ok(stored)
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
    fn test_empty_filter_is_identity() {
        let (_tmp, store) = seeded_store();
        let service = ExpenseService::new(&store);

        let all = store.expenses.get_all().unwrap();
        let listed = service.list(&ExpenseFilter::new()).unwrap();

        assert_eq!(listed.len(), all.len());
        for (a, b) in listed.iter().zip(all.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_category_filter_soundness_and_completeness() {
        let (_tmp, store) = seeded_store();
        let service = ExpenseService::new(&store);

        let filter_opts = ExpenseFilter::new().category("Groceries");
        let listed = service.list(&filter_opts).unwrap();

        assert!(!listed.is_empty());
        for e in &listed {
            assert_eq!(e.category, ExpenseCategory::Groceries);
        }

        let excluded = store
            .expenses
            .get_all()
            .unwrap()
            .into_iter()
            .filter(|e| !listed.iter().any(|l| l.id == e.id));
        for e in excluded {
            assert!(!filter_opts.matches(&e));
        }
    }

    #[test]
    fn test_search_matches_payment_method() {
        let (_tmp, store) = seeded_store();
        let service = ExpenseService::new(&store);

        let listed = service.list(&ExpenseFilter::new().query("upi")).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "Movie tickets");
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let (_tmp, store) = seeded_store();
        let service = ExpenseService::new(&store);

        let listed = service.list(&ExpenseFilter::new().category("Rent")).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn test_create_persists_and_logs() {
        let (_tmp, store) = seeded_store();
        let service = ExpenseService::new(&store);

        let created = service
            .create(CreateExpenseInput {
                date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                category: ExpenseCategory::Healthcare,
                description: "Pharmacy".into(),
                amount: Money::from_units(450),
                payment_method: "Cash".into(),
            })
            .unwrap();

        assert_eq!(created.id.value(), 6);
        assert_eq!(store.expenses.len().unwrap(), 6);
        assert_eq!(store.audit().entry_count().unwrap(), 1);
    }
}
