//! Start-over dialog
//!
//! Confirms discarding the saved snapshot before the wizard returns to the
//! first step.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::format_timestamp;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the start-over confirmation
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(58, 10, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Start over? ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(reset_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn reset_lines(app: &App) -> Vec<Line<'static>> {
    let record = app.wizard.record();
    let saved = format_timestamp(record.meta.last_saved_at, &app.settings.date_format);

    vec![
        Line::from(Span::styled(
            "Every answer, upload and portfolio amount will be discarded.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current step: ", Style::default().fg(Color::Gray)),
            Span::raw(record.step.label()),
        ]),
        Line::from(vec![
            Span::styled("Saved snapshot: ", Style::default().fg(Color::Gray)),
            Span::raw(saved),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Red)),
            Span::raw(" Discard and restart  "),
            Span::styled("[n/Esc]", Style::default().fg(Color::Green)),
            Span::raw(" Keep my progress"),
        ]),
    ]
}
