//! TUI views
//!
//! The three main views plus the tab row and status bar.

pub mod charts;
pub mod dashboard;
pub mod status_bar;
pub mod transactions;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App, ConfirmAction};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::Transactions => transactions::render(frame, app, layout.main),
        ActiveView::Charts => charts::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the tab row
fn render_tabs(frame: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let tabs = Tabs::new(ActiveView::TITLES.to_vec())
        .select(app.active_view.index())
        .block(
            Block::default()
                .title(" Tally ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::TransactionForm => dialogs::transaction::render(frame, app),
        ActiveDialog::BudgetForm => dialogs::budget::render(frame, app),
        ActiveDialog::Confirm(action) => {
            let message = match action {
                ConfirmAction::DeleteTransaction(_) => "Delete this transaction?",
                ConfirmAction::ClearAll => "Delete ALL transactions and budgets?",
            };
            dialogs::confirm::render(frame, message);
        }
        ActiveDialog::None => {}
    }
}
