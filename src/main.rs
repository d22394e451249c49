use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_emi_command, handle_expense_command, handle_export_command, handle_lending_command,
    handle_report_command, handle_split_command, EmiCommands, ExpenseCommands, ExportCommands,
    LendingCommands, SplitCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::{initialize_storage, Store};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack tracks four lists from the command line: day-to-day \
                  expenses, EMIs (installment loans), split expenses shared with \
                  friends, and money lent or borrowed. Every list can be \
                  filtered, summarized, and exported to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense tracking commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// EMI tracking commands
    #[command(subcommand)]
    Emi(EmiCommands),

    /// Lending and borrowing commands
    #[command(subcommand, alias = "lend")]
    Lending(LendingCommands),

    /// Split-expense commands
    #[command(subcommand)]
    Split(SplitCommands),

    /// Show the cross-list overview report
    Report,

    /// Full database export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory with sample data
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let store = Store::new(paths.clone())?;
    store.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, cmd)?;
        }
        Some(Commands::Emi(cmd)) => {
            handle_emi_command(&store, cmd)?;
        }
        Some(Commands::Lending(cmd)) => {
            handle_lending_command(&store, cmd)?;
        }
        Some(Commands::Split(cmd)) => {
            handle_split_command(&store, cmd)?;
        }
        Some(Commands::Report) => {
            handle_report_command(&store)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&store, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.data_dir().display());
            initialize_storage(&store)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Sample data has been created for each list:");
            println!("  - 5 expenses   (fintrack expense list)");
            println!("  - 3 EMIs       (fintrack emi list)");
            println!("  - 3 lending entries (fintrack lending list)");
            println!("  - 3 split expenses  (fintrack split list)");
            println!();
            println!("Run 'fintrack report' for the overview.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Submission log: {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("fintrack - Terminal-based personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack init' to create sample data.");
        }
    }

    Ok(())
}
