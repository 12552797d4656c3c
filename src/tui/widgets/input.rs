//! Text input state for dialog forms
//!
//! A single-line input with cursor support. Dialogs own one per text field
//! and render it via [`TextInput::styled_line`].

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// A simple single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position as a character index
    cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input pre-filled with content, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    /// Move the cursor one character left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Render the content as a line, with a block cursor when focused
    pub fn styled_line(&self, focused: bool) -> Line<'static> {
        if !focused {
            return Line::from(Span::raw(self.content.clone()));
        }

        let chars: Vec<char> = self.content.chars().collect();
        let before: String = chars[..self.cursor].iter().collect();
        let (at, after): (String, String) = if self.cursor < chars.len() {
            (
                chars[self.cursor].to_string(),
                chars[self.cursor + 1..].iter().collect(),
            )
        } else {
            (" ".to_string(), String::new())
        };

        Line::from(vec![
            Span::raw(before),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(after, Style::default().fg(Color::White)),
        ])
    }

    /// Byte index of the cursor within the content
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}
