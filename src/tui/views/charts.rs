//! Chart view
//!
//! Draws the expense distribution pie and the monthly trend onto canvas
//! widgets. All geometry comes from the `charts` module; this file only puts
//! it on screen. Both charts are fully redrawn every frame from the current
//! transaction collection.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::charts::{LineChart, PieChart, PALETTE_SIZE};
use crate::tui::app::App;

/// Fixed slice palette, cycled by category index
const PALETTE: [Color; PALETTE_SIZE] = [
    Color::Rgb(0xdc, 0x14, 0x3c),
    Color::Rgb(0xff, 0x45, 0x00),
    Color::Rgb(0xff, 0x63, 0x47),
    Color::Rgb(0xff, 0x7f, 0x50),
    Color::Rgb(0xff, 0xa5, 0x00),
    Color::Rgb(0xff, 0x8c, 0x00),
    Color::Rgb(0xff, 0x69, 0xb4),
];

const INCOME_COLOR: Color = Color::Green;
const EXPENSE_COLOR: Color = Color::Rgb(0xdc, 0x14, 0x3c);

/// Render the charts view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    render_pie(frame, app, halves[0]);
    render_trend(frame, app, halves[1]);
}

/// Render the expense distribution pie with its legend
fn render_pie(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Expense Distribution ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let chart = PieChart::build(&app.transactions());

    if !chart.has_data() {
        let text = Paragraph::new("No expense data available")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    frame.render_widget(&block, area);
    let inner = block.inner(area);

    let legend_height = (chart.legend.len() as u16).min(inner.height.saturating_sub(5));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(legend_height)])
        .split(inner);

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([-1.15, 1.15])
        .y_bounds([-1.15, 1.15])
        .paint(|ctx| {
            // Fill each slice with radial lines sampled across its sweep
            for slice in &chart.slices {
                let color = PALETTE[slice.color_index % PALETTE.len()];
                let steps = (slice.sweep.ceil() as usize).max(2);
                for step in 0..=steps {
                    let angle = slice.start_angle + slice.sweep * step as f64 / steps as f64;
                    let rad = (90.0 - angle).to_radians();
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: rad.cos(),
                        y2: rad.sin(),
                        color,
                    });
                }
            }
        });
    frame.render_widget(canvas, chunks[0]);

    let legend: Vec<Line> = chart
        .legend
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(PALETTE[entry.color_index % PALETTE.len()]),
                ),
                Span::raw(format!("{}: {:.1}%", entry.category, entry.percentage)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), chunks[1]);
}

/// Render the monthly income/expense trend
fn render_trend(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Monthly Trend ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("— Income ", Style::default().fg(INCOME_COLOR)),
        Span::styled("— Expenses ", Style::default().fg(EXPENSE_COLOR)),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let chart = LineChart::build(&app.transactions());

    if !chart.has_data() {
        let text = Paragraph::new("No transaction data available")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.symbol();
    let y_max = chart.y_max.as_major_f64();
    let x_max = chart.points.len().saturating_sub(1).max(1) as f64;

    let income_points: Vec<(f64, f64)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.income.as_major_f64()))
        .collect();
    let expense_points: Vec<(f64, f64)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.expenses.as_major_f64()))
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([-0.7, x_max + 0.7])
        .y_bounds([-y_max * 0.14, y_max * 1.06])
        .paint(|ctx| {
            // Gridlines with value labels on the vertical axis
            for level in chart.grid_levels() {
                let y = level.as_major_f64();
                ctx.draw(&CanvasLine {
                    x1: -0.5,
                    y1: y,
                    x2: x_max + 0.5,
                    y2: y,
                    color: Color::DarkGray,
                });
                ctx.print(
                    -0.65,
                    y,
                    Line::from(Span::styled(
                        level.format_with_symbol(symbol),
                        Style::default().fg(Color::Gray),
                    )),
                );
            }

            draw_series(ctx, &income_points, INCOME_COLOR);
            draw_series(ctx, &expense_points, EXPENSE_COLOR);

            // Abbreviated month labels along the horizontal axis
            for (i, label) in chart.month_labels().iter().enumerate() {
                ctx.print(
                    i as f64,
                    -y_max * 0.1,
                    Line::from(Span::styled(
                        label.to_string(),
                        Style::default().fg(Color::Gray),
                    )),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Draw one series as connected segments with point markers
fn draw_series(ctx: &mut ratatui::widgets::canvas::Context<'_>, points: &[(f64, f64)], color: Color) {
    for pair in points.windows(2) {
        ctx.draw(&CanvasLine {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
            color,
        });
    }
    ctx.draw(&Points {
        coords: points,
        color,
    });
}
