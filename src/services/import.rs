//! CSV import
//!
//! Reads transactions back from the exporter's format: a header row of
//! `Date,Type,Category,Amount,Description` followed by one row per
//! transaction. Rows that fail to parse are skipped and reported; valid rows
//! are recorded with fresh identifiers.

use std::io::Read;

use csv::ReaderBuilder;

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money, TransactionDraft, TransactionKind};
use crate::storage::Storage;

use super::transaction::TransactionService;

/// Result of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Number of transactions recorded
    pub imported: usize,
    /// Skipped rows as (1-based data row number, reason)
    pub skipped: Vec<(usize, String)>,
}

/// Import transactions from CSV
pub fn import_transactions_csv<R: Read>(storage: &Storage, reader: R) -> TallyResult<ImportOutcome> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let service = TransactionService::new(storage);

    let mut outcome = ImportOutcome::default();

    for (index, record) in csv_reader.records().enumerate() {
        let row = index + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                outcome.skipped.push((row, e.to_string()));
                continue;
            }
        };

        match parse_record(&record) {
            Ok(draft) => {
                service.add(draft)?;
                outcome.imported += 1;
            }
            Err(reason) => outcome.skipped.push((row, reason)),
        }
    }

    if outcome.imported == 0 && !outcome.skipped.is_empty() {
        return Err(TallyError::Import(format!(
            "no rows could be imported ({} skipped)",
            outcome.skipped.len()
        )));
    }

    Ok(outcome)
}

/// Parse one data record into a draft
fn parse_record(record: &csv::StringRecord) -> Result<TransactionDraft, String> {
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .map(str::trim)
            .ok_or_else(|| format!("missing {} column", name))
    };

    let date = field(0, "date")?
        .parse()
        .map_err(|e| format!("bad date: {}", e))?;
    let kind: TransactionKind = field(1, "type")?.parse()?;
    let category: Category = field(2, "category")?.parse()?;
    let amount = Money::parse(field(3, "amount")?).map_err(|e| e.to_string())?;
    let description = field(4, "description")?.to_string();

    let draft = TransactionDraft {
        kind,
        category,
        amount,
        date,
        description,
    };
    draft.validate()?;
    Ok(draft)
}
