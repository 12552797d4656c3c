//! Spending categories
//!
//! The category set is fixed. Expenses use any of the seven categories;
//! income transactions conventionally carry [`Category::Other`] as a
//! placeholder, since categories only partition spending.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of transaction categories
///
/// Declaration order is the canonical enumeration order: budget overviews
/// and pie chart slices are produced in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    Food,
    Rent,
    Transport,
    Entertainment,
    Utilities,
    Healthcare,
    #[default]
    Other,
}

impl Category {
    /// All categories, in enumeration order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Rent,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Healthcare,
        Category::Other,
    ];

    /// The placeholder category used for income transactions
    pub const fn income_placeholder() -> Category {
        Category::Other
    }

    /// Category name as displayed and persisted
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        }
    }

    /// Position within [`Category::ALL`], used to cycle the chart palette
    pub fn index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "rent" => Ok(Category::Rent),
            "transport" => Ok(Category::Transport),
            "entertainment" => Ok(Category::Entertainment),
            "utilities" => Ok(Category::Utilities),
            "healthcare" => Ok(Category::Healthcare),
            "other" => Ok(Category::Other),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order_matches_ord() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Healthcare".parse::<Category>().unwrap(), Category::Healthcare);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_index() {
        assert_eq!(Category::Food.index(), 0);
        assert_eq!(Category::Other.index(), 6);
    }

    #[test]
    fn test_serialization_uses_name() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"Transport\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Transport);
    }
}
