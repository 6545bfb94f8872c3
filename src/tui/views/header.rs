//! Header view
//!
//! Kicker, title and subtitle of the current step with the progress gauge,
//! branch label and last save time.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::display::format_timestamp;
use crate::tui::app::App;
use crate::wizard::header;

/// Render the header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let record = app.wizard.record();
    let step = record.step;
    let phase = step.phase();
    let copy = header(step);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Investment onboarding ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Kicker + branch
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(1), // Progress
        ])
        .split(inner);

    let saved = format_timestamp(record.meta.last_saved_at, &app.settings.date_format);
    let kicker = Line::from(vec![
        Span::styled(copy.kicker, Style::default().fg(Color::Gray)),
        Span::raw("  │  "),
        Span::styled(record.branch_label(), Style::default().fg(Color::Magenta)),
        Span::raw("  │  "),
        Span::styled(format!("Last saved: {}", saved), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(kicker), rows[0]);

    let title = vec![
        Line::from(Span::styled(
            copy.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(copy.subtitle, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(title).wrap(Wrap { trim: true }), rows[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(phase.percent())
        .label(format!("{}%  {}", phase.percent(), phase.name()));
    frame.render_widget(gauge, rows[2]);
}
