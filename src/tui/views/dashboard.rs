//! Dashboard view
//!
//! Income/expenses/balance summary plus the per-category budget overview.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::services::{evaluate_budgets, ledger, BudgetStatus};
use crate::tui::app::App;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(3),    // Budget overview
        ])
        .split(area);

    render_summary(frame, app, chunks[0]);
    render_budget_overview(frame, app, chunks[1]);
}

/// Render the three summary cards
fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let transactions = app.transactions();
    let symbol = app.symbol();

    let income = ledger::total_income(&transactions);
    let expenses = ledger::total_expenses(&transactions);
    let balance = ledger::balance(&transactions);

    let balance_color = if balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let card = |title: &'static str, amount: String, color: Color| {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                amount,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    };

    frame.render_widget(
        card(
            " Total Income ",
            income.format_with_symbol(symbol),
            Color::Green,
        ),
        cards[0],
    );
    frame.render_widget(
        card(
            " Total Expenses ",
            expenses.format_with_symbol(symbol),
            Color::Red,
        ),
        cards[1],
    );
    frame.render_widget(
        card(
            " Balance ",
            balance.format_with_symbol(symbol),
            balance_color,
        ),
        cards[2],
    );
}

/// Render the budget overview with one gauge per configured category
fn render_budget_overview(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Budget Overview ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let transactions = app.transactions();
    let budgets = app.storage.budgets.get_all().unwrap_or_default();
    let statuses = evaluate_budgets(&transactions, &budgets);

    if statuses.is_empty() {
        let text = Paragraph::new("No budgets set. Press 'b' to configure category budgets.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    frame.render_widget(&block, area);
    let inner = block.inner(area);

    // Two rows per category: gauge plus detail line
    let visible = statuses.len().min((inner.height / 2) as usize);
    let mut constraints = vec![Constraint::Length(2); visible];
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let symbol = app.symbol();
    for (status, row) in statuses.iter().take(visible).zip(rows.iter()) {
        render_budget_row(frame, status, symbol, *row);
    }
}

/// Render one category's gauge and detail line
fn render_budget_row(frame: &mut Frame, status: &BudgetStatus, symbol: &str, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let gauge_color = if status.over_budget {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(Color::DarkGray))
        .ratio(status.percentage / 100.0)
        .label(format!("{:13} {:>5.1}%", status.category.name(), status.percentage));
    frame.render_widget(gauge, halves[0]);

    let detail = if status.remaining.is_negative() {
        Line::from(vec![
            Span::raw(format!(
                "  Spent {} of {}  ",
                status.spent.format_with_symbol(symbol),
                status.limit.format_with_symbol(symbol)
            )),
            Span::styled(
                format!(
                    "Over by {}",
                    status.remaining.abs().format_with_symbol(symbol)
                ),
                Style::default().fg(Color::Red),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(format!(
                "  Spent {} of {}  ",
                status.spent.format_with_symbol(symbol),
                status.limit.format_with_symbol(symbol)
            )),
            Span::styled(
                format!(
                    "Remaining {}",
                    status.remaining.format_with_symbol(symbol)
                ),
                Style::default().fg(Color::Green),
            ),
        ])
    };

    frame.render_widget(
        Paragraph::new(detail).style(Style::default().fg(Color::Gray)),
        halves[1],
    );
}
