//! CLI commands for the split-expense list

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_split_summary, format_split_table};
use crate::error::FintrackResult;
use crate::export::export_csv;
use crate::models::SplitStatus;
use crate::reports::SplitSummary;
use crate::services::{CreateSplitInput, SplitFilter, SplitService};
use crate::storage::Store;

use super::{parse_amount, parse_date, today, write_export};

/// Split-expense subcommands
#[derive(Subcommand, Debug)]
pub enum SplitCommands {
    /// List split expenses, optionally filtered
    List {
        /// Filter by status (Pending or Settled); omit for all
        #[arg(short, long)]
        status: Option<String>,

        /// Search descriptions
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },

    /// Show the settlement summary over the filtered view
    Summary {
        /// Filter by status before summarizing
        #[arg(short, long)]
        status: Option<String>,

        /// Search filter applied before summarizing
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },

    /// Add a new split expense
    Add {
        /// Description of the shared bill
        description: String,

        /// Full bill amount in whole currency units
        total_amount: String,

        /// Your own share in whole currency units
        your_share: String,

        /// Who paid the bill; defaults to you
        #[arg(short, long, default_value = "You")]
        paid_by: String,

        /// Participants the cost is split with (repeatable)
        #[arg(short = 'w', long = "with")]
        split_with: Vec<String>,

        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Export the (filtered) split-expense list to CSV
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

/// Handle split-expense commands
pub fn handle_split_command(store: &Store, cmd: SplitCommands) -> FintrackResult<()> {
    let service = SplitService::new(store);

    match cmd {
        SplitCommands::List { status, search } => {
            let filter = SplitFilter {
                status,
                query: search,
            };
            let splits = service.list(&filter)?;
            print!("{}", format_split_table(&splits));
            Ok(())
        }

        SplitCommands::Summary { status, search } => {
            let filter = SplitFilter {
                status,
                query: search,
            };
            let splits = service.list(&filter)?;
            let summary = SplitSummary::compute(&splits);
            print!("{}", format_split_summary(&summary));
            Ok(())
        }

        SplitCommands::Add {
            description,
            total_amount,
            your_share,
            paid_by,
            split_with,
            date,
        } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today(),
            };

            let created = service.create(CreateSplitInput {
                date,
                description,
                total_amount: parse_amount(&total_amount)?,
                paid_by,
                split_with,
                your_share: parse_amount(&your_share)?,
                status: SplitStatus::Pending,
            })?;

            println!(
                "Added split expense {}: {} ({}, your share {})",
                created.id, created.description, created.total_amount, created.your_share
            );
            Ok(())
        }

        SplitCommands::Export {
            output,
            status,
            search,
        } => {
            let filter = SplitFilter {
                status,
                query: search,
            };
            let splits = service.list(&filter)?;
            let file = export_csv(&splits, today());
            let path = write_export(&file, output)?;

            println!(
                "Exported {} split expenses to: {}",
                splits.len(),
                path.display()
            );
            Ok(())
        }
    }
}
