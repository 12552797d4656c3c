//! Transaction mutations
//!
//! All changes to the transaction collection go through this service, which
//! persists the store synchronously after every mutation. Editing never
//! mutates a transaction in place: the original is deleted and a new one is
//! recorded with a fresh identifier.

use crate::error::{TallyError, TallyResult};
use crate::models::{Transaction, TransactionDraft, TransactionId};
use crate::storage::Storage;

/// Service for transaction mutations
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn add(&self, draft: TransactionDraft) -> TallyResult<Transaction> {
        draft.validate().map_err(TallyError::Validation)?;

        let txn = Transaction::new(draft);
        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::debug!("added transaction {}", txn.id.short());
        Ok(txn)
    }

    /// Replace a transaction with an edited version
    ///
    /// The original entry is removed and a new transaction is recorded with a
    /// fresh identifier. Returns `Ok(None)` without touching the collection
    /// when no transaction has the given identifier.
    pub fn edit(&self, id: TransactionId, draft: TransactionDraft) -> TallyResult<Option<Transaction>> {
        draft.validate().map_err(TallyError::Validation)?;

        if !self.storage.transactions.remove(id)? {
            return Ok(None);
        }

        let replacement = Transaction::new(draft);
        self.storage.transactions.insert(replacement.clone())?;
        self.storage.transactions.save()?;

        tracing::debug!(
            "replaced transaction {} with {}",
            id,
            replacement.id.short()
        );
        Ok(Some(replacement))
    }

    /// Delete a transaction
    ///
    /// Deleting an unknown identifier is a silent no-op; returns whether a
    /// transaction was actually removed.
    pub fn delete(&self, id: TransactionId) -> TallyResult<bool> {
        let removed = self.storage.transactions.remove(id)?;
        if removed {
            self.storage.transactions.save()?;
            tracing::debug!("deleted transaction {}", id);
        }
        Ok(removed)
    }

    /// Remove all transactions and budgets
    ///
    /// The selected currency is kept.
    pub fn clear_all(&self) -> TallyResult<()> {
        self.storage.transactions.clear()?;
        self.storage.budgets.clear()?;
        self.storage.save_all()?;

        tracing::debug!("cleared all transactions and budgets");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TallyPaths;
    use crate::models::{Category, Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn draft(cents: i64) -> TransactionDraft {
        TransactionDraft {
            kind: TransactionKind::Expense,
            category: Category::Food,
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description: "Groceries".to_string(),
        }
    }

    #[test]
    fn test_add_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.add(draft(5_000)).unwrap();

        // A fresh storage over the same directory sees the transaction
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service.add(draft(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_edit_assigns_new_id_and_keeps_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let original = service.add(draft(5_000)).unwrap();
        let mut edited = original.to_draft();
        edited.amount = Money::from_cents(7_500);

        let replacement = service.edit(original.id, edited).unwrap().unwrap();

        assert_ne!(replacement.id, original.id);
        assert_eq!(replacement.amount, Money::from_cents(7_500));
        assert_eq!(replacement.category, original.category);
        assert_eq!(replacement.date, original.date);
        assert_eq!(replacement.description, original.description);

        // Exactly one entry remains and the old id is gone
        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert!(storage.transactions.get(original.id).unwrap().is_none());
        assert!(storage.transactions.get(replacement.id).unwrap().is_some());
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.add(draft(5_000)).unwrap();
        let result = service.edit(TransactionId::new(), draft(1)).unwrap();

        assert!(result.is_none());
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_edit_validation_failure_leaves_original() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let original = service.add(draft(5_000)).unwrap();
        let result = service.edit(original.id, draft(-1));

        assert!(result.is_err());
        assert!(storage.transactions.get(original.id).unwrap().is_some());
    }

    #[test]
    fn test_delete_unknown_id_is_silent_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let kept = service.add(draft(5_000)).unwrap();
        let removed = service.delete(TransactionId::new()).unwrap();

        assert!(!removed);
        let all = storage.transactions.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, kept.id);
    }

    #[test]
    fn test_clear_all() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.add(draft(5_000)).unwrap();
        storage
            .budgets
            .set_limit(Category::Food, Money::from_major(500))
            .unwrap();

        service.clear_all().unwrap();

        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert!(storage.budgets.get_all().unwrap().is_empty());
    }
}
