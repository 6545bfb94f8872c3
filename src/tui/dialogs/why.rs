//! "Why we ask this" dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::wizard::why_we_ask;

/// Render the context dialog for the current step
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 9, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Why we ask this ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(Span::styled(
            "Context",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            why_we_ask(app.step()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled("[Esc] Close", Style::default().fg(Color::Yellow))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
