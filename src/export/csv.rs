//! CSV export
//!
//! Serializes the transaction collection to a delimited text table: a fixed
//! header row, then one row per transaction in collection order. The
//! description field is always quoted (it is the only free-text column);
//! embedded quotes are escaped by doubling so the output stays parseable.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// Fixed column header
pub const CSV_HEADER: &str = "Date,Type,Category,Amount,Description";

/// Write the transaction collection as CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TallyResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| TallyError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{}",
            txn.date.format("%Y-%m-%d"),
            txn.kind,
            txn.category,
            txn.amount,
            quote(&txn.description)
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Default export file name for the given date, e.g. "tally-2025-08-07.csv"
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("tally-{}.csv", date.format("%Y-%m-%d"))
}

/// Quote a description field, doubling embedded quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionDraft, TransactionKind};

    fn txn(
        kind: TransactionKind,
        category: Category,
        cents: i64,
        date: &str,
        description: &str,
    ) -> Transaction {
        Transaction::new(TransactionDraft {
            kind,
            category,
            amount: Money::from_cents(cents),
            date: date.parse().unwrap(),
            description: description.to_string(),
        })
    }

    #[test]
    fn test_header_and_rows_in_collection_order() {
        let transactions = vec![
            txn(TransactionKind::Expense, Category::Food, 8_550, "2025-01-07", "Grocery Shopping"),
            txn(TransactionKind::Income, Category::Other, 500_000, "2025-01-01", "Monthly Salary"),
        ];

        let mut output = Vec::new();
        export_transactions_csv(&transactions, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Type,Category,Amount,Description");
        assert_eq!(lines[1], "2025-01-07,expense,Food,85.50,\"Grocery Shopping\"");
        assert_eq!(lines[2], "2025-01-01,income,Other,5000.00,\"Monthly Salary\"");
    }

    #[test]
    fn test_empty_collection_writes_header_only() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.trim(), CSV_HEADER);
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let transactions = vec![txn(
            TransactionKind::Expense,
            Category::Other,
            1_000,
            "2025-01-01",
            "the \"good\" stuff",
        )];

        let mut output = Vec::new();
        export_transactions_csv(&transactions, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"the \"\"good\"\" stuff\""));
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let transactions = vec![
            txn(TransactionKind::Expense, Category::Food, 8_550, "2025-01-07", "Grocery Shopping"),
            txn(TransactionKind::Expense, Category::Rent, 150_000, "2025-01-05", "Monthly Rent"),
            txn(TransactionKind::Income, Category::Other, 50_000, "2025-01-16", "Freelance Project"),
        ];

        let mut output = Vec::new();
        export_transactions_csv(&transactions, &mut output).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(output.as_slice());

        let parsed: Vec<(String, String, String, String)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (
                    r[0].to_string(),
                    r[1].to_string(),
                    r[2].to_string(),
                    r[3].to_string(),
                )
            })
            .collect();

        let expected: Vec<(String, String, String, String)> = transactions
            .iter()
            .map(|t| {
                (
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.category.to_string(),
                    t.amount.to_string(),
                )
            })
            .collect();

        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_default_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        assert_eq!(default_export_filename(date), "tally-2025-08-07.csv");
    }
}
