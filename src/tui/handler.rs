//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! dialog and input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.input_mode == InputMode::Editing {
        handle_editing_key(app, key);
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    handle_normal_key(app, key);
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('w') => app.open_dialog(ActiveDialog::WhyWeAsk),
        KeyCode::Char('R') => app.open_dialog(ActiveDialog::ConfirmReset),

        // Navigation between steps
        KeyCode::Char('n') | KeyCode::PageDown => app.advance(),
        KeyCode::Char('b') | KeyCode::PageUp | KeyCode::Backspace => app.retreat(),
        KeyCode::Char('s') => app.save(),

        // Rows within the step
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.cycle_selected(false),
        KeyCode::Char('l') | KeyCode::Right => app.cycle_selected(true),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('e') => app.activate_selected(),

        KeyCode::Esc => {
            app.error = None;
            app.clear_status();
        }
        _ => {}
    }
}

/// Handle keys while a text input is focused
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
}

/// Handle keys when an informational or confirmation dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::ConfirmReset => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.close_dialog();
                app.reset();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Help | ActiveDialog::WhyWeAsk => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                app.close_dialog()
            }
            _ => {}
        },
        ActiveDialog::Portfolio(_) | ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::OnboardPaths;
    use crate::config::settings::Settings;
    use crate::models::Step;
    use crate::wizard::WizardController;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_navigation_keys() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(WizardController::open(&paths).unwrap(), &settings);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.step(), Step::ModeChoice);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.step(), Step::Intro);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(WizardController::open(&paths).unwrap(), &settings);

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('R'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmReset);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.step(), Step::ModeChoice);

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.step(), Step::Intro);
        assert!(!app.wizard.store().exists());
    }

    #[test]
    fn test_typing_goes_to_input_while_editing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut wizard = WizardController::open(&paths).unwrap();
        wizard.record_mut().step = Step::Identity;
        let mut app = App::new(wizard, &settings);

        press(&mut app, KeyCode::Enter);
        for c in "qn".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.step(), Step::Identity);
        assert_eq!(app.wizard.record().investor_profile.legal_name, "qn");
    }
}
