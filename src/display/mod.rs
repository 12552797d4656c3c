//! Plain-text formatting for CLI output
//!
//! The CLI commands render through these helpers; the TUI has its own
//! widget-based rendering under `tui::views`.

pub mod budget;
pub mod transaction;

pub use budget::{format_budget_overview, format_summary};
pub use transaction::{format_register, format_transaction_row};
