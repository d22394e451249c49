//! CLI commands for the lending list

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_lending_summary, format_lending_table};
use crate::error::{FintrackError, FintrackResult};
use crate::export::export_csv;
use crate::models::{LendingKind, LendingStatus};
use crate::reports::LendingSummary;
use crate::services::{CreateLendingInput, LendingFilter, LendingService};
use crate::storage::Store;

use super::{parse_amount, parse_date, today, write_export};

/// Lending subcommands
#[derive(Subcommand, Debug)]
pub enum LendingCommands {
    /// List lending entries, optionally filtered
    List {
        /// Filter by type (Lent or Borrowed); omit for all
        #[arg(short, long)]
        kind: Option<String>,

        /// Filter by status (Pending or Repaid); omit for all
        #[arg(short, long)]
        status: Option<String>,

        /// Search by person or notes
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },

    /// Show the to-receive / to-pay / net summary over the filtered view
    Summary {
        /// Filter by type before summarizing
        #[arg(short, long)]
        kind: Option<String>,

        /// Filter by status before summarizing
        #[arg(short, long)]
        status: Option<String>,

        /// Search filter applied before summarizing
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },

    /// Add a new lending or borrowing entry
    Add {
        /// Direction: Lent or Borrowed
        kind: String,

        /// The other party
        person: String,

        /// Amount in whole currency units
        amount: String,

        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Export the (filtered) lending list to CSV
    Export {
        /// Output file path; defaults to the suggested filename
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filter by type before exporting
        #[arg(short, long)]
        kind: Option<String>,

        /// Filter by status before exporting
        #[arg(short, long)]
        status: Option<String>,

        /// Search filter applied before exporting
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },
}

/// Handle lending commands
pub fn handle_lending_command(store: &Store, cmd: LendingCommands) -> FintrackResult<()> {
    let service = LendingService::new(store);

    match cmd {
        LendingCommands::List {
            kind,
            status,
            search,
        } => {
            let filter = LendingFilter {
                kind,
                status,
                query: search,
            };
            let entries = service.list(&filter)?;
            print!("{}", format_lending_table(&entries));
            Ok(())
        }

        LendingCommands::Summary {
            kind,
            status,
            search,
        } => {
            let filter = LendingFilter {
                kind,
                status,
                query: search,
            };
            let entries = service.list(&filter)?;
            let summary = LendingSummary::compute(&entries);
            print!("{}", format_lending_summary(&summary));
            Ok(())
        }

        LendingCommands::Add {
            kind,
            person,
            amount,
            date,
            due,
            notes,
        } => {
            let kind = LendingKind::from_name(&kind).ok_or_else(|| {
                FintrackError::Validation(format!("Unknown type (use Lent or Borrowed): {}", kind))
            })?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today(),
            };
            let due_date = match due {
                Some(s) => Some(parse_date(&s)?),
                None => None,
            };

            let created = service.create(CreateLendingInput {
                date,
                person,
                amount: parse_amount(&amount)?,
                kind,
                due_date,
                status: LendingStatus::Pending,
                notes,
            })?;

            println!(
                "Added {} entry {}: {} {}",
                created.kind, created.id, created.person, created.amount
            );
            Ok(())
        }

        LendingCommands::Export {
            output,
            kind,
            status,
            search,
        } => {
            let filter = LendingFilter {
                kind,
                status,
                query: search,
            };
            let entries = service.list(&filter)?;
            let file = export_csv(&entries, today());
            let path = write_export(&file, output)?;

            println!(
                "Exported {} lending entries to: {}",
                entries.len(),
                path.display()
            );
            Ok(())
        }
    }
}
