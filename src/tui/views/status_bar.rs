//! Status bar
//!
//! Bottom line showing either a transient status message or key hints,
//! always ending with the active currency.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(vec![
            Span::styled(
                " q:Quit  Tab:View  a:Add  e:Edit  d:Delete  b:Budgets  f/g:Filter  s:Sort  c:Currency  x:Export  D:Clear",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  [{}]", app.settings.currency),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    };

    frame.render_widget(Paragraph::new(line), area);
}
