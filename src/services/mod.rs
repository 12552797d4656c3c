//! Business logic layer
//!
//! Pure computations (`ledger`, `budget`, `view`) plus the mutation and
//! import services that sit between the UI layers and storage.

pub mod budget;
pub mod import;
pub mod ledger;
pub mod transaction;
pub mod view;

pub use budget::{evaluate as evaluate_budgets, BudgetStatus};
pub use import::{import_transactions_csv, ImportOutcome};
pub use ledger::{Month, MonthlySummary};
pub use transaction::TransactionService;
pub use view::{visible_transactions, CategoryFilter, SortKey, TypeFilter, ViewOptions};
