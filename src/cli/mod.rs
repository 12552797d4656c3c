//! Command handlers for the `tally` binary
//!
//! Each submodule owns one command area: subcommand definitions live next to
//! the handler that executes them, and all terminal output goes through the
//! `display` formatters.

pub mod budget;
pub mod export;
pub mod settings;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export, handle_import};
pub use settings::{handle_clear, handle_config, handle_currency, handle_init};
pub use transaction::{handle_transaction_command, TransactionCommands};
