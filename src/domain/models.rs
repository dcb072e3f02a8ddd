use indexmap::IndexSet;

use crate::domain::catalog;
use crate::domain::errors::{DomainError, DomainResult};

/// The three education stages the wizard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    TenthStandard,
    Intermediate,
    BTech,
}

/// All levels in display order.
pub const ALL_LEVELS: [EducationLevel; 3] = [
    EducationLevel::TenthStandard,
    EducationLevel::Intermediate,
    EducationLevel::BTech,
];

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::TenthStandard => "10th Standard",
            EducationLevel::Intermediate => "Intermediate",
            EducationLevel::BTech => "B.Tech Graduate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EducationLevel::TenthStandard => "Secondary school, foundational skills",
            EducationLevel::Intermediate => "Higher secondary, pre-university skills",
            EducationLevel::BTech => "Engineering graduate, industry skills",
        }
    }
}

/// A static job posting. All fields point into compiled-in catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobPosting {
    pub organization: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    /// Display order; duplicates are not expected.
    pub required_skills: &'static [&'static str],
    pub experience: &'static str,
    pub compensation: &'static str,
}

/// The wizard's whole mutable state: which education level is chosen,
/// which of its skills are toggled on, and whether results are shown.
///
/// `chosen_skills` keeps insertion order for display; matching treats it
/// as a plain set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub chosen_education: Option<EducationLevel>,
    pub chosen_skills: IndexSet<&'static str>,
    pub results_revealed: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses an education level and restarts skill selection.
    ///
    /// Re-selecting the current level behaves the same way: skills are
    /// cleared and results hidden, so the caller can use this as the
    /// "start over" transition.
    pub fn select_education(&mut self, level: EducationLevel) {
        self.chosen_education = Some(level);
        self.chosen_skills.clear();
        self.results_revealed = false;
    }

    /// Adds the skill if absent, removes it if present.
    ///
    /// Requires a chosen education level offering `skill`. The UI only
    /// ever offers catalog skills, so an error here is a caller bug.
    /// Any change drops back out of the results view.
    pub fn toggle_skill(&mut self, skill: &'static str) -> DomainResult<()> {
        let level = self.chosen_education.ok_or(DomainError::NoEducationChosen)?;
        if !catalog::skills_for(level).contains(&skill) {
            return Err(DomainError::SkillNotOffered(skill.to_string()));
        }

        if !self.chosen_skills.shift_remove(skill) {
            self.chosen_skills.insert(skill);
        }
        self.results_revealed = false;
        Ok(())
    }

    /// Shows the results panel. Rejected while no skill is chosen; the
    /// UI hides the reveal control in that state.
    pub fn reveal_results(&mut self) -> DomainResult<()> {
        if self.chosen_skills.is_empty() {
            return Err(DomainError::NoSkillsChosen);
        }
        self.results_revealed = true;
        Ok(())
    }
}
