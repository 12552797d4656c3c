//! Budget editor dialog
//!
//! Modal form with one limit input per category. Saving replaces the whole
//! budget mapping; empty inputs leave their category unconfigured.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Budgets, Category, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::TextInput;

/// State for the budget editor dialog
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    /// One input per category, in enumeration order
    pub inputs: Vec<TextInput>,

    /// Focused input index
    pub focused: usize,

    /// Error message to display
    pub error: Option<String>,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self {
            inputs: Category::ALL.iter().map(|_| TextInput::new()).collect(),
            focused: 0,
            error: None,
        }
    }
}

impl BudgetFormState {
    /// Form pre-filled from the configured budgets
    pub fn from_budgets(budgets: &Budgets) -> Self {
        let inputs = Category::ALL
            .iter()
            .map(|&category| match budgets.limit(category) {
                Some(limit) => TextInput::with_content(limit.to_string()),
                None => TextInput::new(),
            })
            .collect();

        Self {
            inputs,
            focused: 0,
            error: None,
        }
    }

    /// Move focus down or up, wrapping around
    pub fn move_focus(&mut self, delta: isize) {
        let len = self.inputs.len() as isize;
        self.focused = (self.focused as isize + delta).rem_euclid(len) as usize;
    }

    /// The focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        &mut self.inputs[self.focused]
    }

    /// Build the replacement mapping from the form
    ///
    /// Empty inputs are skipped; anything else must parse as a non-negative
    /// amount.
    pub fn to_budgets(&self) -> Result<Budgets, String> {
        let mut budgets = Budgets::new();

        for (category, input) in Category::ALL.iter().zip(&self.inputs) {
            let value = input.value().trim();
            if value.is_empty() {
                continue;
            }

            let limit = Money::parse(value)
                .map_err(|_| format!("invalid limit for {}: '{}'", category, value))?;
            if limit.is_negative() {
                return Err(format!("limit for {} must not be negative", category));
            }
            budgets.set(*category, limit);
        }

        Ok(budgets)
    }
}

/// Render the budget editor dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let form = &app.budget_form;
    let area = centered_rect(50, 70, frame.area());

    let block = Block::default()
        .title(" Category Budgets ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, area);
    frame.render_widget(&block, area);

    let inner = block.inner(area);
    let mut constraints = vec![Constraint::Length(1); Category::ALL.len()];
    constraints.push(Constraint::Length(1)); // spacer
    constraints.push(Constraint::Length(1)); // error
    constraints.push(Constraint::Length(1)); // hints

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    let symbol = app.symbol();
    for (index, (category, input)) in Category::ALL.iter().zip(&form.inputs).enumerate() {
        let focused = index == form.focused;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![
            Span::styled(format!("{:14}", category.name()), label_style),
            Span::styled(format!("{} ", symbol), Style::default().fg(Color::DarkGray)),
        ];
        spans.extend(input.styled_line(focused).spans);

        frame.render_widget(Paragraph::new(Line::from(spans)), rows[index]);
    }

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            rows[Category::ALL.len() + 1],
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Tab/↑↓:Field  Enter:Save  Esc:Cancel  (empty = no budget)",
            Style::default().fg(Color::DarkGray),
        )),
        rows[Category::ALL.len() + 2],
    );
}
