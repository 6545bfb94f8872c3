//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    )])
}

fn help_lines(step: Step) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("n/PgDn", "Continue (submit at review)"),
        key_line("b/PgUp", "Back one step"),
        key_line("s", "Save for later"),
        key_line("w", "Why we ask this"),
        key_line("R", "Start over"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        section("Rows"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("h/l", "Previous/next option"),
        key_line("Enter", "Edit, toggle or follow link"),
        key_line("Esc", "Cancel editing"),
    ];

    match step {
        Step::Review => {
            lines.push(Line::from(""));
            lines.push(section("Review"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "On a section: reopen it for editing"));
        }
        Step::Submitted => {
            lines.push(Line::from(""));
            lines.push(section("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Upload missing documents"));
        }
        _ => {}
    }

    lines
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:12}", key), Style::default().fg(Color::Green)),
        Span::raw(description.to_string()),
    ])
}
