//! Budget management commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money};
use crate::services::evaluate_budgets;
use crate::storage::Storage;

/// Budget management commands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit, e.g. "500" or "500.00"
        limit: String,
    },
    /// Remove the spending limit for a category
    Unset {
        /// Category name
        category: String,
    },
    /// Show the budget overview
    List,
}

/// Handle a budget subcommand
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TallyResult<()> {
    let symbol = settings.currency.symbol();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let category: Category = category.parse().map_err(TallyError::Validation)?;
            let limit =
                Money::parse(&limit).map_err(|e| TallyError::Validation(e.to_string()))?;
            if limit.is_negative() {
                return Err(TallyError::Validation(format!(
                    "limit must not be negative: {}",
                    limit
                )));
            }

            storage.budgets.set_limit(category, limit)?;
            storage.budgets.save()?;
            println!(
                "Budget for {} set to {}",
                category,
                limit.format_with_symbol(symbol)
            );
        }
        BudgetCommands::Unset { category } => {
            let category: Category = category.parse().map_err(TallyError::Validation)?;

            match storage.budgets.remove_limit(category)? {
                Some(previous) => {
                    storage.budgets.save()?;
                    println!(
                        "Removed {} budget (was {})",
                        category,
                        previous.format_with_symbol(symbol)
                    );
                }
                None => println!("No budget set for {}.", category),
            }
        }
        BudgetCommands::List => {
            let transactions = storage.transactions.get_all()?;
            let budgets = storage.budgets.get_all()?;
            let statuses = evaluate_budgets(&transactions, &budgets);

            print!("{}", display::format_budget_overview(&statuses, symbol));
            println!();
            print!("{}", display::format_summary(&transactions, symbol));
        }
    }

    Ok(())
}
