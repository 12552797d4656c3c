//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Derived values (totals, budget statuses, chart geometry) are never cached
//! here: every frame recomputes them from storage, so any mutation is fully
//! reflected on the next draw.

use crate::config::{Settings, TallyPaths};
use crate::models::{Transaction, TransactionId};
use crate::services::{visible_transactions, ViewOptions};
use crate::storage::Storage;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::transaction::TransactionFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Transactions,
    Charts,
}

impl ActiveView {
    /// Tab titles in display order
    pub const TITLES: [&'static str; 3] = ["Dashboard", "Transactions", "Charts"];

    /// Position in the tab row
    pub fn index(&self) -> usize {
        match self {
            ActiveView::Dashboard => 0,
            ActiveView::Transactions => 1,
            ActiveView::Charts => 2,
        }
    }

    /// The next view in tab order, wrapping around
    pub fn next(&self) -> ActiveView {
        match self {
            ActiveView::Dashboard => ActiveView::Transactions,
            ActiveView::Transactions => ActiveView::Charts,
            ActiveView::Charts => ActiveView::Dashboard,
        }
    }
}

/// Action awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTransaction(TransactionId),
    ClearAll,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    TransactionForm,
    BudgetForm,
    Confirm(ConfirmAction),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings (owned so the currency can be changed live)
    pub settings: Settings,

    /// Paths configuration, for persisting settings changes
    pub paths: &'a TallyPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Display criteria for the transaction list
    pub view_options: ViewOptions,

    /// Selected row in the transaction list
    pub selected_index: usize,

    /// Status message shown in the status bar
    pub status_message: Option<String>,

    /// Transaction form state
    pub transaction_form: TransactionFormState,

    /// Budget form state
    pub budget_form: BudgetFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: Settings, paths: &'a TallyPaths) -> Self {
        Self {
            storage,
            settings,
            paths,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            view_options: ViewOptions::default(),
            selected_index: 0,
            status_message: None,
            transaction_form: TransactionFormState::default(),
            budget_form: BudgetFormState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_index = 0;
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The currency symbol to format amounts with
    pub fn symbol(&self) -> &'static str {
        self.settings.currency.symbol()
    }

    /// The full transaction collection
    pub fn transactions(&self) -> Vec<Transaction> {
        self.storage.transactions.get_all().unwrap_or_default()
    }

    /// The filtered, sorted transaction list as displayed
    pub fn visible(&self) -> Vec<Transaction> {
        visible_transactions(&self.transactions(), &self.view_options)
    }

    /// The transaction under the cursor, if any
    pub fn selected_transaction(&self) -> Option<Transaction> {
        self.visible().into_iter().nth(self.selected_index)
    }

    /// Move the list cursor, clamping to the visible range
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
            return;
        }
        let current = self.selected_index.min(len - 1) as isize;
        self.selected_index = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Keep the selection valid after filters or mutations change the list
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Switch the display currency to the next one and persist the choice
    pub fn cycle_currency(&mut self) {
        self.settings.currency = self.settings.currency.next();
        match self.settings.save(self.paths) {
            Ok(()) => self.set_status(format!(
                "Currency: {} ({})",
                self.settings.currency,
                self.settings.currency.symbol()
            )),
            Err(e) => self.set_status(format!("Error saving settings: {}", e)),
        }
    }
}
