//! Tally - Terminal-based personal income and expense tracker
//!
//! This library provides the core functionality for the Tally finance
//! tracker. It records income and expense transactions, tracks per-category
//! spending limits, and renders summary charts (expense distribution and
//! monthly trend) in the terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic (aggregates, budget evaluation, mutations)
//! - `charts`: Pure chart geometry consumed by the renderers
//! - `export`: CSV export
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: Command handlers for the `tally` binary
//! - `tui`: Interactive terminal interface
//!
//! Computation is kept separate from presentation: `services` and `charts`
//! take plain data and return plain data, and the `cli`/`tui` layers only
//! render what those modules produce.

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TallyError, TallyResult};

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG`; without it only warnings and errors from this crate
/// are emitted, so the terminal UI stays clean.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive(
            "tally=warn"
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::WARN.into()),
        );

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
