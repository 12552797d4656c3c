//! Export module
//!
//! Serializes the transaction collection for use outside the tracker.

pub mod csv;

pub use csv::{default_export_filename, export_transactions_csv, CSV_HEADER};
