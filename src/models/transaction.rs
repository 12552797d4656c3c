//! Transaction model
//!
//! A transaction records a single income or expense event. Transactions are
//! never edited in place: an edit deletes the original and records a new
//! transaction with a fresh identifier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::category::Category;
use super::money::Money;

/// Unique transaction identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form for display, e.g. "txn-1a2b3c4d"
    pub fn short(&self) -> String {
        format!("txn-{}", &self.0.to_string()[..8])
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("txn-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    /// Capitalized label for table display
    pub const fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// The other kind
    pub const fn toggled(&self) -> TransactionKind {
        match self {
            TransactionKind::Income => TransactionKind::Expense,
            TransactionKind::Expense => TransactionKind::Income,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(format!(
                "unknown transaction kind '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation, immutable
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Spending category; income uses the placeholder category
    pub category: Category,

    /// Non-negative amount; the kind carries the direction
    pub amount: Money,

    /// Calendar date (no time component)
    pub date: NaiveDate,

    /// Free-text label
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Record a new transaction with a fresh identifier
    pub fn new(draft: TransactionDraft) -> Self {
        Self {
            id: TransactionId::new(),
            kind: draft.kind,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The field values of this transaction, for edit flows
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validated field values supplied by an input layer when recording a
/// transaction. Carries no identifier; one is assigned on creation.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: Category,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
}

impl TransactionDraft {
    /// Check the type/range constraints the core owns
    pub fn validate(&self) -> Result<(), String> {
        if self.amount.is_negative() {
            return Err(format!("amount must not be negative: {}", self.amount));
        }
        Ok(())
    }
}
