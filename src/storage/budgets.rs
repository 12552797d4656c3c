//! Budget repository for JSON storage
//!
//! The budget mapping is small and replaced wholesale on save, so the
//! repository just holds the whole mapping behind a lock.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Budgets, Category, Money};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Budgets>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Budgets::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let loaded: Budgets = read_json_or_default(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *budgets = loaded;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*budgets)
    }

    /// Get a copy of the full mapping
    pub fn get_all(&self) -> Result<Budgets, TallyError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.clone())
    }

    /// Replace the full mapping
    pub fn replace_all(&self, new_budgets: Budgets) -> Result<(), TallyError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *budgets = new_budgets;
        Ok(())
    }

    /// Set a single category limit
    pub fn set_limit(&self, category: Category, limit: Money) -> Result<(), TallyError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.set(category, limit);
        Ok(())
    }

    /// Remove a single category limit, returning the previous value
    pub fn remove_limit(&self, category: Category) -> Result<Option<Money>, TallyError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.unset(category))
    }

    /// Remove all configured budgets
    pub fn clear(&self) -> Result<(), TallyError> {
        self.replace_all(Budgets::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_set_save_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set_limit(Category::Food, Money::from_major(500)).unwrap();
        repo.set_limit(Category::Rent, Money::from_major(1600)).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();

        let budgets = repo2.get_all().unwrap();
        assert_eq!(budgets.limit(Category::Food), Some(Money::from_major(500)));
        assert_eq!(budgets.limit(Category::Rent), Some(Money::from_major(1600)));
    }

    #[test]
    fn test_replace_all() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.set_limit(Category::Food, Money::from_major(500)).unwrap();

        let mut replacement = Budgets::new();
        replacement.set(Category::Transport, Money::from_major(300));
        repo.replace_all(replacement).unwrap();

        let budgets = repo.get_all().unwrap();
        assert_eq!(budgets.limit(Category::Food), None);
        assert_eq!(
            budgets.limit(Category::Transport),
            Some(Money::from_major(300))
        );
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("budgets.json"), "[1,2,").unwrap();

        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }
}
