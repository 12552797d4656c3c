//! Transaction list view
//!
//! Filters and sorts the transaction collection for display. The transform is
//! pure and re-enterable: identical inputs produce identical output order
//! (sorts are stable, so equal keys keep their original relative order).

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Transaction, TransactionKind};

/// Filter on transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn keeps(&self, txn: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => txn.kind == TransactionKind::Income,
            TypeFilter::Expense => txn.kind == TransactionKind::Expense,
        }
    }

    /// The next filter in cycle order, for UI toggling
    pub fn next(&self) -> TypeFilter {
        match self {
            TypeFilter::All => TypeFilter::Income,
            TypeFilter::Income => TypeFilter::Expense,
            TypeFilter::Expense => TypeFilter::All,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Income => write!(f, "income"),
            TypeFilter::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(format!(
                "unknown type filter '{}' (expected all, income or expense)",
                other
            )),
        }
    }
}

/// Filter on category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    One(Category),
}

impl CategoryFilter {
    fn keeps(&self, txn: &Transaction) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::One(category) => txn.category == *category,
        }
    }

    /// Cycle all -> Food -> ... -> Other -> all, for UI toggling
    pub fn next(&self) -> CategoryFilter {
        match self {
            CategoryFilter::All => CategoryFilter::One(Category::ALL[0]),
            CategoryFilter::One(category) => {
                let index = category.index();
                if index + 1 < Category::ALL.len() {
                    CategoryFilter::One(Category::ALL[index + 1])
                } else {
                    CategoryFilter::All
                }
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::One(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::One)
        }
    }
}

/// Sort key for the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl SortKey {
    /// The next key in cycle order, for UI toggling
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::DateDesc => SortKey::DateAsc,
            SortKey::DateAsc => SortKey::AmountDesc,
            SortKey::AmountDesc => SortKey::AmountAsc,
            SortKey::AmountAsc => SortKey::DateDesc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::DateDesc => write!(f, "date-desc"),
            SortKey::DateAsc => write!(f, "date-asc"),
            SortKey::AmountDesc => write!(f, "amount-desc"),
            SortKey::AmountAsc => write!(f, "amount-asc"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date-desc" => Ok(SortKey::DateDesc),
            "date-asc" => Ok(SortKey::DateAsc),
            "amount-desc" => Ok(SortKey::AmountDesc),
            "amount-asc" => Ok(SortKey::AmountAsc),
            other => Err(format!(
                "unknown sort key '{}' (expected date-desc, date-asc, amount-desc or amount-asc)",
                other
            )),
        }
    }
}

/// Combined display criteria for the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub type_filter: TypeFilter,
    pub category_filter: CategoryFilter,
    pub sort: SortKey,
}

/// The ordered subsequence of transactions to display
pub fn visible_transactions(transactions: &[Transaction], options: &ViewOptions) -> Vec<Transaction> {
    let mut visible: Vec<Transaction> = transactions
        .iter()
        .filter(|t| options.type_filter.keeps(t) && options.category_filter.keeps(t))
        .cloned()
        .collect();

    match options.sort {
        SortKey::DateDesc => visible.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::DateAsc => visible.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::AmountDesc => visible.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortKey::AmountAsc => visible.sort_by(|a, b| a.amount.cmp(&b.amount)),
    }

    visible
}
