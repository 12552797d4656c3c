//! Budget and summary display formatting
//!
//! Formats the budget overview and the income/expense summary for terminal
//! output from the CLI commands.

use crate::models::{Money, Transaction};
use crate::services::{ledger, BudgetStatus};

/// Format the overall income/expenses/balance summary
pub fn format_summary(transactions: &[Transaction], symbol: &str) -> String {
    let income = ledger::total_income(transactions);
    let expenses = ledger::total_expenses(transactions);
    let balance = ledger::balance(transactions);

    let mut output = String::new();
    output.push_str(&format!(
        "Income:   {:>14}\n",
        income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses: {:>14}\n",
        expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:  {:>14}\n",
        balance.format_with_symbol(symbol)
    ));
    output
}

/// Format the budget overview as a table
pub fn format_budget_overview(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set. Run 'tally budget set <category> <limit>' to get started.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:13} {:>12} {:>12} {:>12} {:>7}\n",
        "Category", "Limit", "Spent", "Remaining", "Used"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for status in statuses {
        let marker = if status.over_budget { "  OVER" } else { "" };
        output.push_str(&format!(
            "{:13} {:>12} {:>12} {:>12} {:>6.1}%{}\n",
            status.category.name(),
            status.limit.format_with_symbol(symbol),
            status.spent.format_with_symbol(symbol),
            format_remaining(status.remaining, symbol),
            status.percentage,
            marker
        ));
    }

    output
}

/// Remaining amount, shown as "over by" when negative
fn format_remaining(remaining: Money, symbol: &str) -> String {
    if remaining.is_negative() {
        format!("-{}", remaining.abs().format_with_symbol(symbol))
    } else {
        remaining.format_with_symbol(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budgets, Category, TransactionDraft, TransactionKind};
    use crate::services::evaluate_budgets;
    use chrono::NaiveDate;

    fn expense(category: Category, cents: i64) -> Transaction {
        Transaction::new(TransactionDraft {
            kind: TransactionKind::Expense,
            category,
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description: String::new(),
        })
    }

    #[test]
    fn test_summary_lines() {
        let transactions = vec![expense(Category::Food, 8_550)];
        let summary = format_summary(&transactions, "$");

        assert!(summary.contains("Income:"));
        assert!(summary.contains("$85.50"));
        assert!(summary.contains("-$85.50"));
    }

    #[test]
    fn test_overview_empty() {
        let overview = format_budget_overview(&[], "$");
        assert!(overview.contains("No budgets set"));
    }

    #[test]
    fn test_overview_marks_over_budget() {
        let transactions = vec![expense(Category::Food, 50_000)];
        let mut budgets = Budgets::new();
        budgets.set(Category::Food, Money::from_major(100));

        let statuses = evaluate_budgets(&transactions, &budgets);
        let overview = format_budget_overview(&statuses, "$");

        assert!(overview.contains("Food"));
        assert!(overview.contains("OVER"));
        assert!(overview.contains("100.0%"));
        assert!(overview.contains("-$400.00"));
    }
}
