//! TUI Views module
//!
//! The step header, the step body, the action bar and the status bar.

pub mod header;
pub mod status_bar;
pub mod step;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::models::Step;
use crate::wizard::primary_action;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    step::render(frame, app, layout.body);
    render_actions(frame, app, layout.actions);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Primary and secondary actions, plus the blocking message if any
fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.step();
    let mut actions = vec![Span::styled(
        format!(" [n] {} ", primary_action(step)),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];
    if step != Step::Intro && step != Step::Submitted {
        actions.push(Span::raw("  "));
        actions.push(Span::styled("[b] Back", Style::default().fg(Color::White)));
    }
    if step != Step::Submitted {
        actions.push(Span::raw("  "));
        actions.push(Span::styled(
            "[s] Save for later",
            Style::default().fg(Color::White),
        ));
    }

    let mut lines = vec![Line::from(actions)];
    if let Some(error) = &app.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::WhyWeAsk => dialogs::why::render(frame, app),
        ActiveDialog::ConfirmReset => dialogs::reset::render(frame, app),
        ActiveDialog::Portfolio(index) => dialogs::portfolio::render(frame, app, index),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::OnboardPaths;
    use crate::config::settings::Settings;
    use crate::wizard::WizardController;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_intro_and_dialogs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = crate::tui::App::new(WizardController::open(&paths).unwrap(), &settings);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Continue"));
        assert!(text.contains("Total"));

        app.open_dialog(ActiveDialog::WhyWeAsk);
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Why we ask this"));

        app.close_dialog();
        app.open_dialog(ActiveDialog::ConfirmReset);
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Start over?"));
    }

    #[test]
    fn test_blocking_message_is_shown() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut wizard = WizardController::open(&paths).unwrap();
        wizard.record_mut().step = Step::AccountType;
        let mut app = crate::tui::App::new(wizard, &settings);
        app.advance();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Select who is investing to continue."));
    }
}
