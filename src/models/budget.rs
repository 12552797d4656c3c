//! Per-category budget limits
//!
//! A budget limit exists only for categories the user explicitly configured;
//! the mapping is replaced wholesale whenever budgets are saved. There is no
//! period boundary: all recorded transactions count toward a budget's spend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::money::Money;

/// Category-to-limit mapping
///
/// Backed by a `BTreeMap` so iteration follows category enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budgets(BTreeMap<Category, Money>);

impl Budgets {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured limit for a category, if any
    pub fn limit(&self, category: Category) -> Option<Money> {
        self.0.get(&category).copied()
    }

    /// Set the limit for a category
    pub fn set(&mut self, category: Category, limit: Money) {
        self.0.insert(category, limit);
    }

    /// Remove a category's limit, returning the previous value if present
    pub fn unset(&mut self, category: Category) -> Option<Money> {
        self.0.remove(&category)
    }

    /// Iterate configured limits in category enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.0.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of configured categories
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no budgets are configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Category, Money)> for Budgets {
    fn from_iter<I: IntoIterator<Item = (Category, Money)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_limit() {
        let mut budgets = Budgets::new();
        assert!(budgets.is_empty());
        assert_eq!(budgets.limit(Category::Food), None);

        budgets.set(Category::Food, Money::from_major(500));
        assert_eq!(budgets.limit(Category::Food), Some(Money::from_major(500)));
        assert_eq!(budgets.len(), 1);
    }

    #[test]
    fn test_unset() {
        let mut budgets = Budgets::new();
        budgets.set(Category::Rent, Money::from_major(1600));
        assert_eq!(budgets.unset(Category::Rent), Some(Money::from_major(1600)));
        assert_eq!(budgets.unset(Category::Rent), None);
        assert!(budgets.is_empty());
    }

    #[test]
    fn test_iteration_follows_enumeration_order() {
        let mut budgets = Budgets::new();
        budgets.set(Category::Other, Money::from_major(400));
        budgets.set(Category::Food, Money::from_major(500));
        budgets.set(Category::Utilities, Money::from_major(200));

        let order: Vec<Category> = budgets.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::Food, Category::Utilities, Category::Other]
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut budgets = Budgets::new();
        budgets.set(Category::Food, Money::from_major(500));
        budgets.set(Category::Rent, Money::from_major(1600));

        let json = serde_json::to_string(&budgets).unwrap();
        assert!(json.contains("\"Food\""));

        let back: Budgets = serde_json::from_str(&json).unwrap();
        assert_eq!(budgets, back);
    }
}
