//! Expense display formatting

use crate::models::Expense;

use super::truncate;

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:15} {:32} {:>12}  {}\n",
        "Date", "Category", "Description", "Amount", "Payment Method"
    ));
    output.push_str(&"-".repeat(86));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{} {} {} {:>12}  {}\n",
            expense.date.format("%Y-%m-%d"),
            truncate(expense.category.as_str(), 15),
            truncate(&expense.description, 32),
            expense.amount.to_string(),
            expense.payment_method
        ));
    }

    output.push_str(&"-".repeat(86));
    output.push('\n');

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:>59} {:>12}\n",
        format!("Total ({} expenses):", expenses.len()),
        total.to_string()
    ));

    output
}
