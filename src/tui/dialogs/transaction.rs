//! Transaction entry/edit dialog
//!
//! Modal form for recording or re-recording a transaction. Saving an edit
//! deletes the original entry and records a replacement with a new
//! identifier.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, Money, Transaction, TransactionDraft, TransactionId, TransactionKind};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Kind,
    Category,
    Amount,
    Date,
    Description,
}

impl TransactionField {
    /// The next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Kind,
        }
    }

    /// The previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Description,
            Self::Category => Self::Kind,
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone, Default)]
pub struct TransactionFormState {
    /// Currently focused field
    pub field: TransactionField,

    /// Selected kind
    pub kind: TransactionKind,

    /// Selected category index into [`Category::ALL`]
    pub category_index: usize,

    /// Amount input
    pub amount_input: TextInput,

    /// Date input (YYYY-MM-DD)
    pub date_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// When editing, the identifier of the transaction being replaced
    pub editing: Option<TransactionId>,

    /// Error message to display
    pub error: Option<String>,
}

impl TransactionFormState {
    /// Fresh form for adding a transaction, dated today
    pub fn new() -> Self {
        Self {
            date_input: TextInput::with_content(
                Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ),
            ..Self::default()
        }
    }

    /// Form pre-filled from an existing transaction, for editing
    pub fn for_edit(txn: &Transaction) -> Self {
        Self {
            field: TransactionField::default(),
            kind: txn.kind,
            category_index: txn.category.index(),
            amount_input: TextInput::with_content(txn.amount.to_string()),
            date_input: TextInput::with_content(txn.date.format("%Y-%m-%d").to_string()),
            description_input: TextInput::with_content(txn.description.clone()),
            editing: Some(txn.id),
            error: None,
        }
    }

    /// The currently selected category
    pub fn category(&self) -> Category {
        Category::ALL[self.category_index % Category::ALL.len()]
    }

    /// Toggle between income and expense
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        if self.kind == TransactionKind::Income {
            self.category_index = Category::income_placeholder().index();
        }
    }

    /// Cycle the category selection
    pub fn cycle_category(&mut self, delta: isize) {
        let len = Category::ALL.len() as isize;
        let next = (self.category_index as isize + delta).rem_euclid(len);
        self.category_index = next as usize;
    }

    /// The text input belonging to the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.field {
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Description => Some(&mut self.description_input),
            _ => None,
        }
    }

    /// Build a draft from the form fields
    pub fn to_draft(&self) -> Result<TransactionDraft, String> {
        let amount =
            Money::parse(self.amount_input.value()).map_err(|e| e.to_string())?;
        let date = self
            .date_input
            .value()
            .parse()
            .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", self.date_input.value()))?;

        let category = match self.kind {
            TransactionKind::Income => Category::income_placeholder(),
            TransactionKind::Expense => self.category(),
        };

        let draft = TransactionDraft {
            kind: self.kind,
            category,
            amount,
            date,
            description: self.description_input.value().to_string(),
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Render the transaction form dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let form = &app.transaction_form;
    let area = centered_rect(56, 60, frame.area());

    let title = if form.editing.is_some() {
        " Edit Transaction "
    } else {
        " Add Transaction "
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, area);
    frame.render_widget(&block, area);

    let inner = block.inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Description
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let selector = |label: &str, value: String, focused: bool| -> Line<'static> {
        let marker = if focused { "◀ " } else { "  " };
        let end = if focused { " ▶" } else { "" };
        Line::from(vec![
            field_label(label, focused),
            Span::styled(
                format!("{}{}{}", marker, value, end),
                if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                },
            ),
        ])
    };

    let kind_label = match form.kind {
        TransactionKind::Income => "Income".to_string(),
        TransactionKind::Expense => "Expense".to_string(),
    };
    frame.render_widget(
        Paragraph::new(selector("Type", kind_label, form.field == TransactionField::Kind)),
        rows[0],
    );

    let category_label = if form.kind == TransactionKind::Income {
        "Salary/Income".to_string()
    } else {
        form.category().name().to_string()
    };
    frame.render_widget(
        Paragraph::new(selector(
            "Category",
            category_label,
            form.field == TransactionField::Category,
        )),
        rows[1],
    );

    let text_row = |label: &str, input: &TextInput, focused: bool| -> Line<'static> {
        let mut spans = vec![field_label(label, focused)];
        spans.extend(input.styled_line(focused).spans);
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text_row(
            "Amount",
            &form.amount_input,
            form.field == TransactionField::Amount,
        )),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(text_row(
            "Date",
            &form.date_input,
            form.field == TransactionField::Date,
        )),
        rows[3],
    );
    frame.render_widget(
        Paragraph::new(text_row(
            "Description",
            &form.description_input,
            form.field == TransactionField::Description,
        )),
        rows[4],
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            rows[6],
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Tab:Next field  ←/→:Change  Enter:Save  Esc:Cancel",
            Style::default().fg(Color::DarkGray),
        )),
        rows[7],
    );
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:13}", label), style)
}
