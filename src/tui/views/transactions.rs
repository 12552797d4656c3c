//! Transaction list view
//!
//! Shows the filtered, sorted transaction table with the current display
//! criteria in the header.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the transaction list view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter header
            Constraint::Min(3),    // Table
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
}

/// Render the filter/sort header
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Transactions ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.view_options.type_filter.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  │  "),
        Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.view_options.category_filter.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  │  "),
        Span::styled("Sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.view_options.sort.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  │  "),
        Span::styled(
            "f/g/s to change",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the transaction table
fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let visible = app.visible();

    if visible.is_empty() {
        let text = Paragraph::new("No transactions found. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(9),  // Type
        Constraint::Length(15), // Category
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Description
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.symbol();
    let rows: Vec<Row> = visible
        .iter()
        .map(|txn| {
            let (sign, amount_style) = if txn.is_income() {
                ("+", Style::default().fg(Color::Green))
            } else {
                ("-", Style::default().fg(Color::Red))
            };

            Row::new(vec![
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(txn.kind.label()),
                Cell::from(txn.category.name()),
                Cell::from(format!("{}{}", sign, txn.amount.format_with_symbol(symbol)))
                    .style(amount_style),
                Cell::from(txn.description.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(visible.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
