//! Ledger aggregates
//!
//! Pure computations over the transaction collection: overall totals,
//! per-category spend, and the monthly income/expense series. Nothing here
//! mutates or performs I/O; callers pass a slice and consume the result.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Money, Transaction};

/// Sum of all income amounts
pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Sum of all expense amounts
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses; may be negative
pub fn balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}

/// Sum of expense amounts in one category
pub fn spend_by_category(transactions: &[Transaction], category: Category) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category)
        .map(|t| t.amount)
        .sum()
}

/// Expense totals for every category, in enumeration order
///
/// Categories with zero spend are included; callers that only want active
/// categories filter on the amount.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<(Category, Money)> {
    Category::ALL
        .iter()
        .map(|&c| (c, spend_by_category(transactions, c)))
        .collect()
}

/// A calendar year-month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Abbreviated month name, e.g. "Jan"
    pub fn label(&self) -> &'static str {
        const ABBREV: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        ABBREV[(self.month.clamp(1, 12) - 1) as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Income and expense totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
}

/// Transactions grouped by calendar month, ascending
///
/// Only months with at least one transaction appear; gaps between months are
/// not filled in.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<Month, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let entry = by_month
            .entry(Month::of(txn.date))
            .or_insert((Money::zero(), Money::zero()));
        if txn.is_income() {
            entry.0 += txn.amount;
        } else {
            entry.1 += txn.amount;
        }
    }

    by_month
        .into_iter()
        .map(|(month, (income, expenses))| MonthlySummary {
            month,
            income,
            expenses,
        })
        .collect()
}
