//! Export and import commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;

use crate::error::{TallyError, TallyResult};
use crate::export::{default_export_filename, export_transactions_csv};
use crate::services::import_transactions_csv;
use crate::storage::Storage;

/// Export all transactions to a CSV file
///
/// With no transactions this is a no-op notice, not an error.
pub fn handle_export(storage: &Storage, path: Option<PathBuf>) -> TallyResult<()> {
    let transactions = storage.transactions.get_all()?;

    if transactions.is_empty() {
        println!("No transactions to export.");
        return Ok(());
    }

    let path = path.unwrap_or_else(|| {
        PathBuf::from(default_export_filename(Local::now().date_naive()))
    });

    let file = File::create(&path)
        .map_err(|e| TallyError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    export_transactions_csv(&transactions, &mut writer)?;

    println!(
        "Exported {} transactions to {}",
        transactions.len(),
        path.display()
    );
    Ok(())
}

/// Import transactions from a CSV file in the export format
pub fn handle_import(storage: &Storage, file: PathBuf) -> TallyResult<()> {
    let reader = File::open(&file)
        .map_err(|e| TallyError::Import(format!("Failed to open {}: {}", file.display(), e)))?;

    let outcome = import_transactions_csv(storage, reader)?;

    println!("Imported {} transactions.", outcome.imported);
    for (row, reason) in &outcome.skipped {
        println!("  Skipped row {}: {}", row, reason);
    }
    Ok(())
}
