//! CLI commands for the expense list

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::{FintrackError, FintrackResult};
use crate::export::export_csv;
use crate::models::ExpenseCategory;
use crate::services::{import_expenses_csv, CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Store;

use super::{parse_amount, parse_date, today, write_export};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses, optionally filtered
    List {
        /// Filter by category (e.g. "Groceries"); omit for all categories
        #[arg(short, long)]
        category: Option<String>,

        /// Search descriptions and payment methods
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Add a new expense
    Add {
        /// Category (Groceries, Transportation, Entertainment, Utilities,
        /// Shopping, Healthcare, Others)
        category: String,

        /// Description of the expense
        description: String,

        /// Amount in whole currency units
        amount: String,

        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Payment method
        #[arg(short, long, default_value = "Cash")]
        payment_method: String,
    },

    /// Export the (filtered) expense list to CSV
    Export {
        /// Output file path; defaults to the suggested filename
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filter by category before exporting
        #[arg(short, long)]
        category: Option<String>,

        /// Search filter applied before exporting
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Import expenses from a CSV file (the exporter's column layout)
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Handle expense commands
pub fn handle_expense_command(store: &Store, cmd: ExpenseCommands) -> FintrackResult<()> {
    match cmd {
        ExpenseCommands::List { category, search } => {
            let filter = ExpenseFilter {
                category,
                query: search,
            };
            let expenses = ExpenseService::new(store).list(&filter)?;
            print!("{}", format_expense_table(&expenses));
            Ok(())
        }

        ExpenseCommands::Add {
            category,
            description,
            amount,
            date,
            payment_method,
        } => {
            let category = ExpenseCategory::from_name(&category).ok_or_else(|| {
                FintrackError::Validation(format!("Unknown category: {}", category))
            })?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today(),
            };

            let created = ExpenseService::new(store).create(CreateExpenseInput {
                date,
                category,
                description,
                amount: parse_amount(&amount)?,
                payment_method,
            })?;

            println!(
                "Added expense {}: {} {} ({})",
                created.id, created.date, created.description, created.amount
            );
            Ok(())
        }

        ExpenseCommands::Export {
            output,
            category,
            search,
        } => {
            let filter = ExpenseFilter {
                category,
                query: search,
            };
            let expenses = ExpenseService::new(store).list(&filter)?;
            let file = export_csv(&expenses, today());
            let path = write_export(&file, output)?;

            println!("Exported {} expenses to: {}", expenses.len(), path.display());
            Ok(())
        }

        ExpenseCommands::Import { file } => {
            let imported = import_expenses_csv(store, &file)?;
            println!("Imported {} expenses from: {}", imported.len(), file.display());
            Ok(())
        }
    }
}
