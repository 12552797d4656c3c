//! Transaction repository for JSON storage
//!
//! Manages loading and saving the transaction collection. The collection
//! keeps insertion order; display order is always re-derived by the view
//! layer, and the exporter walks the collection as stored.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Serializable transaction file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    entries: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: TransactionData = read_json_or_default(&self.path)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *entries = file_data.transactions;
        Ok(())
    }

    /// Save transactions to disk in collection order
    pub fn save(&self) -> Result<(), TallyError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: entries.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TallyError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in collection order
    pub fn get_all(&self) -> Result<Vec<Transaction>, TallyError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Append a transaction to the collection
    pub fn insert(&self, txn: Transaction) -> Result<(), TallyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.push(txn);
        Ok(())
    }

    /// Remove a transaction by ID
    ///
    /// Returns false when no transaction has the given ID; the collection is
    /// left unchanged in that case.
    pub fn remove(&self, id: TransactionId) -> Result<bool, TallyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = entries.len();
        entries.retain(|t| t.id != id);
        Ok(entries.len() < before)
    }

    /// Remove all transactions
    pub fn clear(&self) -> Result<(), TallyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.clear();
        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, TallyError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }

    /// Check whether the collection is empty
    pub fn is_empty(&self) -> Result<bool, TallyError> {
        Ok(self.count()? == 0)
    }
}
