//! Transaction display formatting
//!
//! Formats transactions for terminal output from the CLI commands.

use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };

    format!(
        "{:12} {} {:7} {:13} {:>14} {}",
        txn.id.short(),
        txn.date.format("%Y-%m-%d"),
        txn.kind.label(),
        txn.category,
        format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
        truncate(&txn.description, 40)
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:7} {:13} {:>14} {}\n",
        "Id", "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
