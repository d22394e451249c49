//! CLI commands for the EMI list

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::format_emi_table;
use crate::error::FintrackResult;
use crate::export::export_csv;
use crate::models::EmiStatus;
use crate::services::{CreateEmiInput, EmiFilter, EmiService};
use crate::storage::Store;

use super::{parse_amount, parse_date, today, write_export};

/// EMI subcommands
#[derive(Subcommand, Debug)]
pub enum EmiCommands {
    /// List EMIs, optionally filtered
    List {
        /// Filter by status (Active or Completed); omit for all
        #[arg(short, long)]
        status: Option<String>,

        /// Search loan types and lenders
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },

    /// Add a new EMI
    Add {
        /// Kind of loan (e.g. "Home Loan")
        loan_type: String,

        /// Lending institution
        lender: String,

        /// Total loan amount in whole currency units
        total_amount: String,

        /// Monthly installment in whole currency units
        emi_amount: String,

        /// Tenure in months
        #[arg(short, long)]
        tenure: u32,

        /// Installments already paid
        #[arg(short, long, default_value = "0")]
        paid_months: u32,

        /// Next due date (YYYY-MM-DD)
        #[arg(short, long)]
        next_due: Option<String>,
    },

    /// Export the (filtered) EMI list to CSV
    Export {
        /// Output file path; defaults to the suggested filename
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filter by status before exporting
        #[arg(short, long)]
        status: Option<String>,

        /// Search filter applied before exporting
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },
}

/// Handle EMI commands
pub fn handle_emi_command(store: &Store, cmd: EmiCommands) -> FintrackResult<()> {
    match cmd {
        EmiCommands::List { status, search } => {
            let filter = EmiFilter {
                status,
                query: search,
            };
            let emis = EmiService::new(store).list(&filter)?;
            print!("{}", format_emi_table(&emis));
            Ok(())
        }

        EmiCommands::Add {
            loan_type,
            lender,
            total_amount,
            emi_amount,
            tenure,
            paid_months,
            next_due,
        } => {
            let next_due_date = match next_due {
                Some(s) => Some(parse_date(&s)?),
                None => None,
            };
            let status = if tenure > 0 && paid_months == tenure {
                EmiStatus::Completed
            } else {
                EmiStatus::Active
            };

            let created = EmiService::new(store).create(CreateEmiInput {
                loan_type,
                lender,
                total_amount: parse_amount(&total_amount)?,
                emi_amount: parse_amount(&emi_amount)?,
                tenure,
                paid_months,
                next_due_date,
                status,
            })?;

            println!(
                "Added EMI {}: {} via {} ({}/month)",
                created.id, created.loan_type, created.lender, created.emi_amount
            );
            Ok(())
        }

        EmiCommands::Export {
            output,
            status,
            search,
        } => {
            let filter = EmiFilter {
                status,
                query: search,
            };
            let emis = EmiService::new(store).list(&filter)?;
            let file = export_csv(&emis, today());
            let path = write_export(&file, output)?;

            println!("Exported {} EMIs to: {}", emis.len(), path.display());
            Ok(())
        }
    }
}
