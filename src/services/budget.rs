//! Budget evaluation
//!
//! Combines per-category spend with configured limits to produce the budget
//! overview. Categories without a configured limit are omitted entirely; they
//! are not shown as "0% / no data".

use crate::models::{Budgets, Category, Money, Transaction};

use super::ledger;

/// Evaluation result for one budgeted category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// The budgeted category
    pub category: Category,
    /// Configured limit
    pub limit: Money,
    /// Total spend in the category across all recorded transactions
    pub spent: Money,
    /// Progress toward the limit, clamped to [0, 100]
    pub percentage: f64,
    /// Limit minus spend; negative means over budget by that much
    pub remaining: Money,
    /// True when spend strictly exceeds the limit
    pub over_budget: bool,
}

/// Evaluate every category with a configured limit > 0, in enumeration order
pub fn evaluate(transactions: &[Transaction], budgets: &Budgets) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .filter(|(_, limit)| limit.is_positive())
        .map(|(category, limit)| {
            let spent = ledger::spend_by_category(transactions, category);
            let percentage =
                (spent.as_major_f64() / limit.as_major_f64() * 100.0).clamp(0.0, 100.0);

            BudgetStatus {
                category,
                limit,
                spent,
                percentage,
                remaining: limit - spent,
                over_budget: spent > limit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionKind};
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
    fn test_unconfigured_categories_are_omitted() {
        let transactions = vec![expense(Category::Food, 5_000)];
        let mut budgets = Budgets::new();
        budgets.set(Category::Rent, Money::from_major(1600));

        let statuses = evaluate(&transactions, &budgets);
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].category, Category::Rent);
    }

    #[test]
    fn test_zero_limit_is_omitted() {
        let mut budgets = Budgets::new();
        budgets.set(Category::Food, Money::zero());

        assert!(evaluate(&[], &budgets).is_empty());
    }

    #[test]
    fn test_under_budget() {
        let transactions = vec![expense(Category::Food, 30_000)];
        let mut budgets = Budgets::new();
        budgets.set(Category::Food, Money::from_major(500));

        let statuses = evaluate(&transactions, &budgets);
        let status = &statuses[0];
        assert_eq!(status.spent, Money::from_major(300));
        assert!((status.percentage - 60.0).abs() < 1e-9);
        assert_eq!(status.remaining, Money::from_major(200));
        assert!(!status.over_budget);
    }

    #[test]
    fn test_percentage_is_clamped_when_over_budget() {
        // limit=100, spend=500 => percentage caps at 100, remaining -400
        let transactions = vec![expense(Category::Food, 50_000)];
        let mut budgets = Budgets::new();
        budgets.set(Category::Food, Money::from_major(100));

        let statuses = evaluate(&transactions, &budgets);
        let status = &statuses[0];
        assert_eq!(status.percentage, 100.0);
        assert_eq!(status.remaining, Money::from_major(-400));
        assert!(status.over_budget);
    }

    #[test]
    fn test_exactly_at_limit_is_not_over() {
        let transactions = vec![expense(Category::Food, 10_000)];
        let mut budgets = Budgets::new();
        budgets.set(Category::Food, Money::from_major(100));

        let statuses = evaluate(&transactions, &budgets);
        assert_eq!(statuses[0].percentage, 100.0);
        assert_eq!(statuses[0].remaining, Money::zero());
        assert!(!statuses[0].over_budget);
    }

    #[test]
    fn test_results_follow_enumeration_order() {
        let mut budgets = Budgets::new();
        budgets.set(Category::Other, Money::from_major(400));
        budgets.set(Category::Food, Money::from_major(500));
        budgets.set(Category::Healthcare, Money::from_major(300));

        let order: Vec<Category> = evaluate(&[], &budgets).iter().map(|s| s.category).collect();
        assert_eq!(
            order,
            vec![Category::Food, Category::Healthcare, Category::Other]
        );
    }
}
