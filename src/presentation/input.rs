use crate::application::{App, Command, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        if app.show_help {
            Self::handle_help_keys(app, key);
            return;
        }

        match app.screen() {
            Screen::EducationPicker => Self::handle_education_keys(app, key),
            Screen::SkillPicker | Screen::SkillPickerWithResults => {
                Self::handle_skill_keys(app, key)
            }
        }
    }

    fn handle_education_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.status_message = None;
                app.cursor_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.status_message = None;
                app.cursor_down();
            }
            KeyCode::Enter => {
                let level = app.highlighted_level();
                Self::apply(app, Command::SelectEducation(level));
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            _ => {}
        }
    }

    fn handle_skill_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.status_message = None;
                app.cursor_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.status_message = None;
                app.cursor_down();
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(skill) = app.highlighted_skill() {
                    Self::apply(app, Command::ToggleSkill(skill));
                }
            }
            KeyCode::Char('r') => {
                // Only advertised while a skill is chosen; harmless otherwise.
                if !app.selection.chosen_skills.is_empty() {
                    Self::apply(app, Command::RevealResults);
                }
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                Self::apply(app, Command::Back);
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            _ => {}
        }
    }

    fn handle_help_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    /// Applies a command; a rejection lands in the status bar.
    fn apply(app: &mut App, command: Command) {
        if let Err(err) = app.apply(command) {
            app.status_message = Some(err.to_string());
        }
    }
}
