use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_budget_command, handle_clear, handle_config, handle_currency, handle_export,
    handle_import, handle_init, handle_transaction_command, BudgetCommands, TransactionCommands,
};
use tally::config::{Settings, TallyPaths};
use tally::storage::Storage;
use tally::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "Tally records income and expense transactions, tracks per-category \
                  budgets, and renders summary charts in the terminal. Run without a \
                  subcommand to launch the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show or set the display currency
    Currency {
        /// Currency code (USD, EUR, GBP, JPY, INR)
        code: Option<String>,
    },

    /// Export all transactions to a CSV file
    Export {
        /// Output path (defaults to tally-<date>.csv)
        path: Option<PathBuf>,
    },

    /// Import transactions from a CSV file in the export format
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Delete all transactions and budgets
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Initialize the data directory
    Init {
        /// Seed sample transactions and budgets
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tally::init_logging();

    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let mut settings = Settings::load_or_default(&paths);

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            run_tui(&storage, settings, &paths)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Currency { code }) => {
            handle_currency(&paths, &mut settings, code)?;
        }
        Some(Commands::Export { path }) => {
            handle_export(&storage, path)?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&storage, file)?;
        }
        Some(Commands::Clear { yes }) => {
            handle_clear(&storage, yes)?;
        }
        Some(Commands::Init { sample }) => {
            handle_init(&paths, &settings, &storage, sample)?;
        }
        Some(Commands::Config) => {
            handle_config(&paths, &settings);
        }
    }

    Ok(())
}
