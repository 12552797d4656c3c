//! Configuration, currency, and maintenance commands

use chrono::Local;

use crate::config::{Settings, TallyPaths};
use crate::error::{TallyError, TallyResult};
use crate::models::Currency;
use crate::services::TransactionService;
use crate::storage::{seed_sample_data, Storage};

/// Show or change the display currency
pub fn handle_currency(
    paths: &TallyPaths,
    settings: &mut Settings,
    code: Option<String>,
) -> TallyResult<()> {
    match code {
        Some(code) => {
            let currency: Currency = code.parse().map_err(TallyError::Validation)?;
            settings.currency = currency;
            settings.save(paths)?;
            println!(
                "Display currency set to {} ({})",
                currency,
                currency.symbol()
            );
        }
        None => {
            println!(
                "Display currency: {} ({})",
                settings.currency,
                settings.currency.symbol()
            );
            let codes: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
            println!("Available: {}", codes.join(", "));
        }
    }
    Ok(())
}

/// Show current configuration and paths
pub fn handle_config(paths: &TallyPaths, settings: &Settings) {
    println!("Tally Configuration");
    println!("===================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency: {}", settings.currency);
}

/// Delete all transactions and budgets
pub fn handle_clear(storage: &Storage, yes: bool) -> TallyResult<()> {
    if !yes {
        println!("This deletes all transactions and budgets and cannot be undone.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    TransactionService::new(storage).clear_all()?;
    println!("All data cleared.");
    Ok(())
}

/// Initialize the data directory, optionally seeding sample data
pub fn handle_init(
    paths: &TallyPaths,
    settings: &Settings,
    storage: &Storage,
    sample: bool,
) -> TallyResult<()> {
    paths.ensure_directories()?;
    settings.save(paths)?;
    storage.save_all()?;

    println!("Initialized Tally at: {}", paths.base_dir().display());

    if sample {
        seed_sample_data(storage, Local::now().date_naive())?;
        println!(
            "Seeded {} sample transactions and starter budgets.",
            storage.transactions.count()?
        );
        println!("Run 'tally' to explore them in the TUI.");
    }

    Ok(())
}
