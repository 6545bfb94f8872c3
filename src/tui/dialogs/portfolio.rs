//! Portfolio amount dialog

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the amount editor for the portfolio item at `index`
pub fn render(frame: &mut Frame, app: &App, index: usize) {
    let area = centered_rect_fixed(56, 8, frame.area());

    frame.render_widget(Clear, area);

    let name = app
        .wizard
        .record()
        .portfolio_items
        .get(index)
        .map(|item| item.name.as_str())
        .unwrap_or("Portfolio item");

    let block = Block::default()
        .title(" Edit portfolio amount ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1),
    );

    frame.render_widget(
        &app.input,
        Rect::new(inner.x + 1, inner.y + 3, inner.width.saturating_sub(2), 1),
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Save  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel   Whole dollars; other characters are ignored"),
        ])),
        Rect::new(inner.x + 1, inner.y + 5, inner.width.saturating_sub(2), 1),
    );
}
