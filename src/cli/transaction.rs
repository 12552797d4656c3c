//! Transaction management commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money, TransactionDraft, TransactionId, TransactionKind};
use crate::services::{
    visible_transactions, CategoryFilter, SortKey, TransactionService, TypeFilter, ViewOptions,
};
use crate::storage::Storage;

/// Transaction management commands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount, e.g. "42.50"
        amount: String,
        /// Free-text description
        description: String,
        /// Transaction kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Category (income always uses Other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// List transactions
    List {
        /// Filter by kind: all, income or expense
        #[arg(short, long, default_value = "all")]
        kind: String,
        /// Filter by category: all or a category name
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Sort order: date-desc, date-asc, amount-desc or amount-asc
        #[arg(short, long, default_value = "date-desc")]
        sort: String,
    },
    /// Re-record a transaction with changed fields (assigns a new identifier)
    Edit {
        /// Transaction identifier (full or short form)
        id: String,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction identifier (full or short form)
        id: String,
    },
}

/// Handle a transaction subcommand
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency.symbol();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            kind,
            category,
            date,
        } => {
            let kind: TransactionKind = kind.parse().map_err(TallyError::Validation)?;
            let category = match kind {
                TransactionKind::Income => Category::income_placeholder(),
                TransactionKind::Expense => {
                    category.parse().map_err(TallyError::Validation)?
                }
            };
            let amount = Money::parse(&amount)
                .map_err(|e| TallyError::Validation(e.to_string()))?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let txn = service.add(TransactionDraft {
                kind,
                category,
                amount,
                date,
                description,
            })?;
            println!("Added {}", display::format_transaction_row(&txn, symbol));
        }
        TransactionCommands::List {
            kind,
            category,
            sort,
        } => {
            let options = ViewOptions {
                type_filter: kind.parse::<TypeFilter>().map_err(TallyError::Validation)?,
                category_filter: category
                    .parse::<CategoryFilter>()
                    .map_err(TallyError::Validation)?,
                sort: sort.parse::<SortKey>().map_err(TallyError::Validation)?,
            };

            let all = storage.transactions.get_all()?;
            let visible = visible_transactions(&all, &options);
            print!("{}", display::format_register(&visible, symbol));
        }
        TransactionCommands::Edit {
            id,
            amount,
            description,
            kind,
            category,
            date,
        } => {
            let id = match resolve_id(storage, &id)? {
                Some(id) => id,
                None => {
                    println!("No transaction matches '{}'.", id);
                    return Ok(());
                }
            };
            let existing = storage
                .transactions
                .get(id)?
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;

            let mut draft = existing.to_draft();
            if let Some(kind) = kind {
                draft.kind = kind.parse().map_err(TallyError::Validation)?;
            }
            if let Some(category) = category {
                draft.category = category.parse().map_err(TallyError::Validation)?;
            }
            if draft.kind == TransactionKind::Income {
                draft.category = Category::income_placeholder();
            }
            if let Some(amount) = amount {
                draft.amount = Money::parse(&amount)
                    .map_err(|e| TallyError::Validation(e.to_string()))?;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if let Some(description) = description {
                draft.description = description;
            }

            match service.edit(id, draft)? {
                Some(txn) => {
                    println!("Replaced {} with:", existing.id.short());
                    println!("{}", display::format_transaction_row(&txn, symbol));
                }
                None => println!("No transaction matches '{}'.", id),
            }
        }
        TransactionCommands::Delete { id } => match resolve_id(storage, &id)? {
            Some(resolved) => {
                if service.delete(resolved)? {
                    println!("Deleted {}", resolved.short());
                } else {
                    println!("No transaction matches '{}'; nothing deleted.", id);
                }
            }
            None => println!("No transaction matches '{}'; nothing deleted.", id),
        },
    }

    Ok(())
}

/// Resolve a user-supplied identifier, accepting a unique prefix of the
/// full UUID as shown in `tally transaction list`.
fn resolve_id(storage: &Storage, input: &str) -> TallyResult<Option<TransactionId>> {
    if let Ok(id) = input.parse::<TransactionId>() {
        return Ok(Some(id));
    }

    let needle = input
        .strip_prefix("txn-")
        .unwrap_or(input)
        .to_ascii_lowercase();
    if needle.is_empty() {
        return Ok(None);
    }

    let all = storage.transactions.get_all()?;
    let matches: Vec<TransactionId> = all
        .iter()
        .filter(|t| t.id.to_string().starts_with(&needle))
        .map(|t| t.id)
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0])),
        n => Err(TallyError::Validation(format!(
            "identifier '{}' is ambiguous ({} matches)",
            input, n
        ))),
    }
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

    fn add_sample(storage: &Storage) -> crate::models::Transaction {
        TransactionService::new(storage)
            .add(TransactionDraft {
                kind: TransactionKind::Expense,
                category: Category::Food,
                amount: Money::from_cents(5_000),
                date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                description: "test".to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_resolve_full_id() {
        let (_temp_dir, storage) = create_test_storage();
        let txn = add_sample(&storage);

        let resolved = resolve_id(&storage, &txn.id.to_string()).unwrap();
        assert_eq!(resolved, Some(txn.id));
    }

    #[test]
    fn test_resolve_short_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let txn = add_sample(&storage);

        let resolved = resolve_id(&storage, &txn.id.short()).unwrap();
        assert_eq!(resolved, Some(txn.id));
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let (_temp_dir, storage) = create_test_storage();
        add_sample(&storage);

        assert_eq!(resolve_id(&storage, "ffffffff").unwrap(), None);
    }
}
