//! CLI commands for full-database export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{FintrackError, FintrackResult};
use crate::export::{json, yaml, FullExport};
use crate::storage::Store;

/// Full-export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all four lists to a single file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(store: &Store, cmd: ExportCommands) -> FintrackResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(store, output, format, pretty),
        ExportCommands::Info => handle_export_info(store),
    }
}

/// Handle full export
fn handle_export_all(
    store: &Store,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> FintrackResult<()> {
    let file = File::create(&output).map_err(|e| {
        FintrackError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => {
            json::export_full_json(store, &mut writer, pretty)?;
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(store, &mut writer)?;
        }
    }

    println!("Full database exported to: {}", output.display());
    Ok(())
}

/// Show export information
fn handle_export_info(store: &Store) -> FintrackResult<()> {
    let export = FullExport::from_store(store)?;

    println!("Export Information");
    println!("==================\n");

    println!("Schema Version: {}", export.schema_version);
    println!("App Version:    {}", export.app_version);
    println!();

    println!("Data Summary:");
    println!("  Expenses:        {}", export.metadata.expense_count);
    println!("  EMIs:            {}", export.metadata.emi_count);
    println!("  Lending entries: {}", export.metadata.lending_count);
    println!("  Split expenses:  {}", export.metadata.split_count);
    println!();

    if let Some(earliest) = &export.metadata.earliest_expense {
        println!("Expense Date Range:");
        println!("  Earliest: {}", earliest);
    }
    if let Some(latest) = &export.metadata.latest_expense {
        println!("  Latest:   {}", latest);
    }

    println!("\nExamples:");
    println!("  fintrack export all backup.json --format json --pretty");
    println!("  fintrack export all backup.yaml --format yaml");
    println!("  fintrack expense export --output expenses.csv");

    Ok(())
}
