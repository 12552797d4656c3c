//! Key handling for the TUI
//!
//! Dispatches key events to the active dialog or the global keymap. Every
//! accepted mutation goes through the services layer, which persists the
//! store before the next frame recomputes all derived values.

use std::fs::File;
use std::io::BufWriter;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::export::{default_export_filename, export_transactions_csv};
use crate::models::TransactionKind;
use crate::services::TransactionService;

use super::app::{ActiveDialog, ActiveView, App, ConfirmAction};
use super::dialogs::budget::BudgetFormState;
use super::dialogs::transaction::{TransactionFormState, TransactionField};

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.active_dialog {
        ActiveDialog::None => handle_global_key(app, key),
        ActiveDialog::TransactionForm => handle_transaction_form_key(app, key),
        ActiveDialog::BudgetForm => handle_budget_form_key(app, key),
        ActiveDialog::Confirm(action) => handle_confirm_key(app, action, key),
    }
}

/// Keymap outside of dialogs
fn handle_global_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab => app.switch_view(app.active_view.next()),
        KeyCode::Char('1') => app.switch_view(ActiveView::Dashboard),
        KeyCode::Char('2') => app.switch_view(ActiveView::Transactions),
        KeyCode::Char('3') => app.switch_view(ActiveView::Charts),

        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),

        KeyCode::Char('a') => {
            app.clear_status();
            app.transaction_form = TransactionFormState::new();
            app.active_dialog = ActiveDialog::TransactionForm;
        }
        KeyCode::Char('e') => {
            if app.active_view == ActiveView::Transactions {
                if let Some(txn) = app.selected_transaction() {
                    app.clear_status();
                    app.transaction_form = TransactionFormState::for_edit(&txn);
                    app.active_dialog = ActiveDialog::TransactionForm;
                }
            }
        }
        KeyCode::Char('d') => {
            if app.active_view == ActiveView::Transactions {
                if let Some(txn) = app.selected_transaction() {
                    app.active_dialog =
                        ActiveDialog::Confirm(ConfirmAction::DeleteTransaction(txn.id));
                }
            }
        }
        KeyCode::Char('D') => {
            app.active_dialog = ActiveDialog::Confirm(ConfirmAction::ClearAll);
        }
        KeyCode::Char('b') => {
            app.clear_status();
            let budgets = app.storage.budgets.get_all().unwrap_or_default();
            app.budget_form = BudgetFormState::from_budgets(&budgets);
            app.active_dialog = ActiveDialog::BudgetForm;
        }
        KeyCode::Char('c') => app.cycle_currency(),

        KeyCode::Char('f') => {
            app.view_options.type_filter = app.view_options.type_filter.next();
            app.selected_index = 0;
        }
        KeyCode::Char('g') => {
            app.view_options.category_filter = app.view_options.category_filter.next();
            app.selected_index = 0;
        }
        KeyCode::Char('s') => {
            app.view_options.sort = app.view_options.sort.next();
            app.selected_index = 0;
        }

        KeyCode::Char('x') => export_transactions(app),
        _ => {}
    }
}

/// Write the full collection to a dated CSV file in the working directory
fn export_transactions(app: &mut App) {
    let transactions = app.transactions();

    if transactions.is_empty() {
        app.set_status("No transactions to export.");
        return;
    }

    let filename = default_export_filename(Local::now().date_naive());
    let result = File::create(&filename)
        .map_err(|e| crate::TallyError::Export(e.to_string()))
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            export_transactions_csv(&transactions, &mut writer)
        });

    match result {
        Ok(()) => app.set_status(format!(
            "Exported {} transactions to {}",
            transactions.len(),
            filename
        )),
        Err(e) => app.set_status(format!("Export failed: {}", e)),
    }
}

/// Keymap while the transaction form is open
fn handle_transaction_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.active_dialog = ActiveDialog::None,
        KeyCode::Enter => submit_transaction_form(app),
        KeyCode::Tab | KeyCode::Down => {
            app.transaction_form.field = app.transaction_form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.transaction_form.field = app.transaction_form.field.prev();
        }
        KeyCode::Left | KeyCode::Right => match app.transaction_form.field {
            TransactionField::Kind => app.transaction_form.toggle_kind(),
            TransactionField::Category => {
                if app.transaction_form.kind == TransactionKind::Expense {
                    let delta = if key.code == KeyCode::Left { -1 } else { 1 };
                    app.transaction_form.cycle_category(delta);
                }
            }
            _ => {
                if let Some(input) = app.transaction_form.focused_input() {
                    if key.code == KeyCode::Left {
                        input.move_left();
                    } else {
                        input.move_right();
                    }
                }
            }
        },
        KeyCode::Char(' ') if app.transaction_form.field == TransactionField::Kind => {
            app.transaction_form.toggle_kind();
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.insert(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.delete();
            }
        }
        _ => {}
    }
}

/// Validate the form and run the add or edit mutation
fn submit_transaction_form(app: &mut App) {
    let draft = match app.transaction_form.to_draft() {
        Ok(draft) => draft,
        Err(message) => {
            app.transaction_form.error = Some(message);
            return;
        }
    };

    let service = TransactionService::new(app.storage);
    let result = match app.transaction_form.editing {
        Some(id) => service.edit(id, draft).map(|replaced| match replaced {
            Some(txn) => format!("Updated transaction {}", txn.id.short()),
            None => "Transaction no longer exists.".to_string(),
        }),
        None => service
            .add(draft)
            .map(|txn| format!("Added transaction {}", txn.id.short())),
    };

    match result {
        Ok(message) => {
            app.set_status(message);
            app.active_dialog = ActiveDialog::None;
            app.clamp_selection();
        }
        Err(e) => app.transaction_form.error = Some(e.to_string()),
    }
}

/// Keymap while the budget editor is open
fn handle_budget_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.active_dialog = ActiveDialog::None,
        KeyCode::Enter => submit_budget_form(app),
        KeyCode::Tab | KeyCode::Down => app.budget_form.move_focus(1),
        KeyCode::BackTab | KeyCode::Up => app.budget_form.move_focus(-1),
        KeyCode::Left => app.budget_form.focused_input().move_left(),
        KeyCode::Right => app.budget_form.focused_input().move_right(),
        KeyCode::Char(c) => app.budget_form.focused_input().insert(c),
        KeyCode::Backspace => app.budget_form.focused_input().backspace(),
        KeyCode::Delete => app.budget_form.focused_input().delete(),
        _ => {}
    }
}

/// Validate the budget form and replace the mapping wholesale
fn submit_budget_form(app: &mut App) {
    let budgets = match app.budget_form.to_budgets() {
        Ok(budgets) => budgets,
        Err(message) => {
            app.budget_form.error = Some(message);
            return;
        }
    };

    let result = app
        .storage
        .budgets
        .replace_all(budgets)
        .and_then(|()| app.storage.budgets.save());

    match result {
        Ok(()) => {
            app.set_status("Budgets saved.");
            app.active_dialog = ActiveDialog::None;
        }
        Err(e) => app.budget_form.error = Some(e.to_string()),
    }
}

/// Keymap while a confirmation prompt is open
fn handle_confirm_key(app: &mut App, action: ConfirmAction, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let service = TransactionService::new(app.storage);
            let result = match action {
                ConfirmAction::DeleteTransaction(id) => service
                    .delete(id)
                    .map(|removed| if removed { "Transaction deleted." } else { "Transaction was already gone." }),
                ConfirmAction::ClearAll => service.clear_all().map(|()| "All data cleared."),
            };

            match result {
                Ok(message) => app.set_status(message),
                Err(e) => app.set_status(format!("Error: {}", e)),
            }
            app.active_dialog = ActiveDialog::None;
            app.clamp_selection();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.active_dialog = ActiveDialog::None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TallyPaths};
    use crate::models::{Category, Money, TransactionDraft};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_env() -> (TempDir, Storage, TallyPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, paths)
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
    fn test_quit_key() {
        let (_temp_dir, storage, paths) = create_test_env();
        let mut app = App::new(&storage, Settings::default(), &paths);

        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_views() {
        let (_temp_dir, storage, paths) = create_test_env();
        let mut app = App::new(&storage, Settings::default(), &paths);

        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_view, ActiveView::Transactions);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_view, ActiveView::Charts);
    }

    #[test]
    fn test_add_opens_transaction_form() {
        let (_temp_dir, storage, paths) = create_test_env();
        let mut app = App::new(&storage, Settings::default(), &paths);

        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.active_dialog, ActiveDialog::TransactionForm);
        assert!(app.transaction_form.editing.is_none());

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_form_submission_adds_transaction() {
        let (_temp_dir, storage, paths) = create_test_env();
        let mut app = App::new(&storage, Settings::default(), &paths);

        handle_key(&mut app, key(KeyCode::Char('a')));
        // Navigate to Amount and type a value
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Tab));
        for c in "42.50".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(storage.transactions.count().unwrap(), 1);
        let all = storage.transactions.get_all().unwrap();
        assert_eq!(all[0].amount, Money::from_cents(4_250));
    }

    #[test]
    fn test_form_submission_with_bad_amount_keeps_dialog() {
        let (_temp_dir, storage, paths) = create_test_env();
        let mut app = App::new(&storage, Settings::default(), &paths);

        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.active_dialog, ActiveDialog::TransactionForm);
        assert!(app.transaction_form.error.is_some());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let (_temp_dir, storage, paths) = create_test_env();
        let txn = add_sample(&storage);
        let mut app = App::new(&storage, Settings::default(), &paths);
        app.switch_view(ActiveView::Transactions);

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::DeleteTransaction(txn.id))
        );

        handle_key(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_confirm_no_keeps_transaction() {
        let (_temp_dir, storage, paths) = create_test_env();
        add_sample(&storage);
        let mut app = App::new(&storage, Settings::default(), &paths);
        app.switch_view(ActiveView::Transactions);

        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Char('n')));

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_budget_form_submission() {
        let (_temp_dir, storage, paths) = create_test_env();
        let mut app = App::new(&storage, Settings::default(), &paths);

        handle_key(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.active_dialog, ActiveDialog::BudgetForm);

        // Food is the first input
        for c in "500".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.active_dialog, ActiveDialog::None);
        let budgets = storage.budgets.get_all().unwrap();
        assert_eq!(budgets.limit(Category::Food), Some(Money::from_major(500)));
    }

    #[test]
    fn test_filter_key_resets_selection() {
        let (_temp_dir, storage, paths) = create_test_env();
        add_sample(&storage);
        add_sample(&storage);
        let mut app = App::new(&storage, Settings::default(), &paths);
        app.switch_view(ActiveView::Transactions);
        app.move_selection(1);

        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_export_with_no_transactions_is_notice() {
        let (_temp_dir, storage, paths) = create_test_env();
        let mut app = App::new(&storage, Settings::default(), &paths);

        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(
            app.status_message.as_deref(),
            Some("No transactions to export.")
        );
    }
}
