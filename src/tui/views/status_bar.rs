//! Status bar view
//!
//! Shows the step position, portfolio total, status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let record = app.wizard.record();
    let step = record.step;

    let mut spans = vec![
        Span::styled(
            format!(" {}/{} ", step.index() + 1, Step::ALL.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│ "),
        Span::styled(
            format!("Portfolio {}", record.portfolio_total()),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
    }

    let hints = " n:Continue  b:Back  s:Save  w:Why  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = usize::from(area.width).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
