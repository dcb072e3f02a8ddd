//! Application state management for the terminal career mentor.
//!
//! This module holds the wizard state, derives the current screen from
//! it, and applies user commands through a single reducer.

use crate::domain::{catalog, matching_jobs, EducationLevel, JobPosting, SelectionState, ALL_LEVELS};
use crate::domain::errors::DomainResult;

/// The screen currently presented to the user.
///
/// Never stored: always derived from the selection state, so the two
/// cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing one of the three education levels
    EducationPicker,
    /// Toggling skills for the chosen level
    SkillPicker,
    /// Skill picker with the matching job postings shown below it
    SkillPickerWithResults,
}

/// A user interaction, decoupled from the key that produced it.
///
/// The input layer translates key presses into commands; tests drive
/// the wizard through commands directly, with no terminal attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectEducation(EducationLevel),
    ToggleSkill(&'static str),
    RevealResults,
    /// Restarts skill selection for the current level. The original
    /// product labels this "back to education selection" but only ever
    /// resets skills; that behavior is kept as-is.
    Back,
}

/// Main application state: the wizard selection plus cursor positions
/// and transient UI state.
///
/// # Examples
///
/// ```
/// use skillmatch::application::{App, Screen};
///
/// let app = App::default();
/// assert_eq!(app.screen(), Screen::EducationPicker);
/// ```
#[derive(Debug, Default)]
pub struct App {
    /// The wizard's selection state
    pub selection: SelectionState,
    /// Highlighted row on the education picker
    pub education_cursor: usize,
    /// Highlighted row on the skill picker
    pub skill_cursor: usize,
    /// Whether the help popup is open
    pub show_help: bool,
    /// Scroll position in the help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Derives the current screen from the selection state.
    pub fn screen(&self) -> Screen {
        match self.selection.chosen_education {
            None => Screen::EducationPicker,
            Some(_) if self.selection.results_revealed => Screen::SkillPickerWithResults,
            Some(_) => Screen::SkillPicker,
        }
    }

    /// Skills offered on the current skill picker, empty before an
    /// education level is chosen.
    pub fn current_skills(&self) -> &'static [&'static str] {
        self.selection
            .chosen_education
            .map(catalog::skills_for)
            .unwrap_or(&[])
    }

    /// Postings matching the current selection, recomputed on demand.
    pub fn matching_postings(&self) -> Vec<&'static JobPosting> {
        matching_jobs(&self.selection.chosen_skills, catalog::job_postings())
    }

    /// Applies a user command to the wizard state.
    ///
    /// The only fallible commands are `ToggleSkill` with a skill the
    /// current level does not offer and `RevealResults` with nothing
    /// chosen; the input layer never produces the former and hides the
    /// reveal key for the latter.
    pub fn apply(&mut self, command: Command) -> DomainResult<()> {
        match command {
            Command::SelectEducation(level) => {
                self.selection.select_education(level);
                self.skill_cursor = 0;
                self.status_message = None;
            }
            Command::ToggleSkill(skill) => {
                self.selection.toggle_skill(skill)?;
                self.status_message = None;
            }
            Command::RevealResults => {
                self.selection.reveal_results()?;
                let count = self.matching_postings().len();
                self.status_message = Some(match count {
                    0 => "No matching opportunities yet - try more skills".to_string(),
                    1 => "1 matching opportunity".to_string(),
                    n => format!("{} matching opportunities", n),
                });
            }
            Command::Back => {
                if let Some(level) = self.selection.chosen_education {
                    self.selection.select_education(level);
                    self.skill_cursor = 0;
                    self.status_message = Some("Skill selection restarted".to_string());
                }
            }
        }
        Ok(())
    }

    /// Moves the highlight up on whichever picker is showing.
    pub fn cursor_up(&mut self) {
        match self.screen() {
            Screen::EducationPicker => {
                if self.education_cursor > 0 {
                    self.education_cursor -= 1;
                }
            }
            Screen::SkillPicker | Screen::SkillPickerWithResults => {
                if self.skill_cursor > 0 {
                    self.skill_cursor -= 1;
                }
            }
        }
    }

    /// Moves the highlight down on whichever picker is showing.
    pub fn cursor_down(&mut self) {
        match self.screen() {
            Screen::EducationPicker => {
                if self.education_cursor + 1 < ALL_LEVELS.len() {
                    self.education_cursor += 1;
                }
            }
            Screen::SkillPicker | Screen::SkillPickerWithResults => {
                if self.skill_cursor + 1 < self.current_skills().len() {
                    self.skill_cursor += 1;
                }
            }
        }
    }

    /// The education level under the cursor on the education picker.
    pub fn highlighted_level(&self) -> EducationLevel {
        ALL_LEVELS[self.education_cursor.min(ALL_LEVELS.len() - 1)]
    }

    /// The skill under the cursor, if any skills are showing.
    pub fn highlighted_skill(&self) -> Option<&'static str> {
        self.current_skills().get(self.skill_cursor).copied()
    }

    /// Opens the help popup.
    pub fn open_help(&mut self) {
        self.show_help = true;
        self.help_scroll = 0;
    }

    /// Closes the help popup.
    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::EducationPicker);
        assert_eq!(app.education_cursor, 0);
        assert_eq!(app.skill_cursor, 0);
        assert!(!app.show_help);
        assert!(app.status_message.is_none());
        assert!(app.current_skills().is_empty());
    }

    #[test]
    fn test_screen_routing() {
        let mut app = App::default();
        assert_eq!(app.screen(), Screen::EducationPicker);

        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();
        assert_eq!(app.screen(), Screen::SkillPicker);

        app.apply(Command::ToggleSkill("Python")).unwrap();
        app.apply(Command::RevealResults).unwrap();
        assert_eq!(app.screen(), Screen::SkillPickerWithResults);
    }

    #[test]
    fn test_toggle_returns_to_skill_picker_from_results() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();
        app.apply(Command::ToggleSkill("Python")).unwrap();
        app.apply(Command::RevealResults).unwrap();

        app.apply(Command::ToggleSkill("React")).unwrap();

        assert_eq!(app.screen(), Screen::SkillPicker);
    }

    #[test]
    fn test_select_education_resets_cursor_and_status() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();
        app.skill_cursor = 4;
        app.status_message = Some("stale".to_string());

        app.apply(Command::SelectEducation(EducationLevel::Intermediate)).unwrap();

        assert_eq!(app.skill_cursor, 0);
        assert!(app.status_message.is_none());
        assert_eq!(app.screen(), Screen::SkillPicker);
    }

    #[test]
    fn test_reveal_without_skills_is_rejected_and_state_unchanged() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();

        let result = app.apply(Command::RevealResults);

        assert_eq!(result, Err(DomainError::NoSkillsChosen));
        assert_eq!(app.screen(), Screen::SkillPicker);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_reveal_sets_match_count_status() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();
        app.apply(Command::ToggleSkill("Python")).unwrap();
        app.apply(Command::RevealResults).unwrap();

        assert_eq!(app.status_message.as_deref(), Some("1 matching opportunity"));
    }

    #[test]
    fn test_reveal_with_no_matches_still_reveals() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::TenthStandard)).unwrap();
        app.apply(Command::ToggleSkill("Communication")).unwrap();
        app.apply(Command::RevealResults).unwrap();

        assert_eq!(app.screen(), Screen::SkillPickerWithResults);
        assert!(app.matching_postings().is_empty());
        assert!(app.status_message.as_deref().unwrap().contains("No matching"));
    }

    #[test]
    fn test_back_restarts_skill_selection() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();
        app.apply(Command::ToggleSkill("Python")).unwrap();
        app.apply(Command::RevealResults).unwrap();

        app.apply(Command::Back).unwrap();

        // Stays on the skill picker for the same level with everything
        // cleared, matching the original product's behavior.
        assert_eq!(app.screen(), Screen::SkillPicker);
        assert_eq!(
            app.selection.chosen_education,
            Some(EducationLevel::BTech)
        );
        assert!(app.selection.chosen_skills.is_empty());
    }

    #[test]
    fn test_back_before_education_is_a_noop() {
        let mut app = App::default();
        app.apply(Command::Back).unwrap();
        assert_eq!(app.screen(), Screen::EducationPicker);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_education_cursor_bounds() {
        let mut app = App::default();
        app.cursor_up();
        assert_eq!(app.education_cursor, 0);

        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.education_cursor, ALL_LEVELS.len() - 1);
    }

    #[test]
    fn test_skill_cursor_bounds() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::TenthStandard)).unwrap();

        for _ in 0..20 {
            app.cursor_down();
        }
        assert_eq!(app.skill_cursor, app.current_skills().len() - 1);

        for _ in 0..20 {
            app.cursor_up();
        }
        assert_eq!(app.skill_cursor, 0);
    }

    #[test]
    fn test_highlighted_skill_follows_cursor() {
        let mut app = App::default();
        assert!(app.highlighted_skill().is_none());

        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();
        assert_eq!(app.highlighted_skill(), Some("React"));

        app.cursor_down();
        assert_eq!(app.highlighted_skill(), Some("Node.js"));
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::default();
        app.help_scroll = 7;
        app.open_help();
        assert!(app.show_help);
        assert_eq!(app.help_scroll, 0);
        app.close_help();
        assert!(!app.show_help);
    }

    #[test]
    fn test_end_to_end_data_scientist_scenario() {
        let mut app = App::default();
        app.apply(Command::SelectEducation(EducationLevel::BTech)).unwrap();
        app.apply(Command::ToggleSkill("Machine Learning")).unwrap();
        app.apply(Command::ToggleSkill("Python")).unwrap();
        app.apply(Command::RevealResults).unwrap();

        assert_eq!(app.screen(), Screen::SkillPickerWithResults);
        let postings = app.matching_postings();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].role, "Data Scientist");
        assert_eq!(postings[0].organization, "DataTech Solutions");
        assert_eq!(postings[0].location, "Bangalore");
        assert_eq!(postings[0].compensation, "8-12 LPA");
    }
}
