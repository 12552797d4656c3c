//! Sample data seeding
//!
//! Populates an empty store with a realistic month of activity plus starter
//! budget limits, so the dashboard and charts have something to show right
//! after `tally init --sample`.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money, Transaction, TransactionDraft, TransactionKind};

use super::Storage;

/// Seed the store with sample transactions and budgets
///
/// Dates are laid out across the month containing `today` plus the previous
/// month, so the trend chart has two points. Refuses to overwrite existing
/// transactions.
pub fn seed_sample_data(storage: &Storage, today: NaiveDate) -> TallyResult<()> {
    if !storage.transactions.is_empty()? {
        return Err(TallyError::Validation(
            "sample data can only be seeded into an empty store".into(),
        ));
    }

    let this_month = today.with_day(1).unwrap_or(today);
    let prev_month = this_month - Duration::days(1);

    let rows: [(TransactionKind, Category, i64, u32, NaiveDate, &str); 16] = [
        (TransactionKind::Income, Category::Other, 480_000, 1, prev_month, "Monthly Salary"),
        (TransactionKind::Expense, Category::Rent, 150_000, 5, prev_month, "Monthly Rent Payment"),
        (TransactionKind::Income, Category::Other, 500_000, 1, this_month, "Monthly Salary"),
        (TransactionKind::Expense, Category::Rent, 150_000, 5, this_month, "Monthly Rent Payment"),
        (TransactionKind::Expense, Category::Food, 8_550, 7, this_month, "Grocery Shopping"),
        (TransactionKind::Expense, Category::Transport, 12_000, 8, this_month, "Gas and Car Maintenance"),
        (TransactionKind::Expense, Category::Utilities, 15_000, 10, this_month, "Electricity and Water Bills"),
        (TransactionKind::Expense, Category::Entertainment, 4_599, 12, this_month, "Netflix and Spotify"),
        (TransactionKind::Expense, Category::Food, 6_230, 14, this_month, "Restaurant Dinner"),
        (TransactionKind::Expense, Category::Healthcare, 20_000, 15, this_month, "Doctor Visit and Medication"),
        (TransactionKind::Income, Category::Other, 50_000, 16, this_month, "Freelance Project"),
        (TransactionKind::Expense, Category::Food, 9_575, 18, this_month, "Grocery Shopping"),
        (TransactionKind::Expense, Category::Entertainment, 7_500, 20, this_month, "Movie and Dinner"),
        (TransactionKind::Expense, Category::Transport, 4_500, 22, this_month, "Uber Rides"),
        (TransactionKind::Expense, Category::Other, 12_000, 25, this_month, "Clothing Shopping"),
        (TransactionKind::Expense, Category::Food, 5_520, 27, this_month, "Lunch with Friends"),
    ];

    for (kind, category, cents, day, anchor, description) in rows {
        let txn = Transaction::new(TransactionDraft {
            kind,
            category,
            amount: Money::from_cents(cents),
            date: date_in_month(anchor, day),
            description: description.to_string(),
        });
        storage.transactions.insert(txn)?;
    }

    let limits = [
        (Category::Food, 500),
        (Category::Rent, 1600),
        (Category::Transport, 300),
        (Category::Entertainment, 200),
        (Category::Utilities, 200),
        (Category::Healthcare, 300),
        (Category::Other, 400),
    ];
    for (category, units) in limits {
        storage.budgets.set_limit(category, Money::from_major(units))?;
    }

    storage.save_all()?;
    tracing::debug!("seeded {} sample transactions", rows.len());
    Ok(())
}

/// A date on the given day within `anchor`'s month, clamped to the month's
/// last day (so seeding works in February too).
fn date_in_month(anchor: NaiveDate, day: u32) -> NaiveDate {
    anchor.with_day(day).unwrap_or_else(|| {
        let next_month = if anchor.month() == 12 {
            NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
        };
        match next_month {
            Some(first) => first - Duration::days(1),
            None => anchor,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TallyPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_seed_populates_store() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        seed_sample_data(&storage, today).unwrap();

        assert_eq!(storage.transactions.count().unwrap(), 16);
        let budgets = storage.budgets.get_all().unwrap();
        assert_eq!(budgets.len(), 7);
        assert_eq!(budgets.limit(Category::Rent), Some(Money::from_major(1600)));
    }

    #[test]
    fn test_seed_refuses_nonempty_store() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        seed_sample_data(&storage, today).unwrap();
        let err = seed_sample_data(&storage, today).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_seed_spans_two_months() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        seed_sample_data(&storage, today).unwrap();

        let all = storage.transactions.get_all().unwrap();
        assert!(all.iter().any(|t| t.date.month() == 2));
        assert!(all.iter().any(|t| t.date.month() == 3));
    }

    #[test]
    fn test_date_in_month_clamps_short_months() {
        let feb = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(
            date_in_month(feb, 30),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );

        let dec = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(
            date_in_month(dec, 15),
            NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_seed_works_in_february() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        // Previous month is February of a leap year
        seed_sample_data(&storage, today).unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 16);
    }
}
