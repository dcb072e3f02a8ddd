#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidCatalog(String),
    NoEducationChosen,
    SkillNotOffered(String),
    NoSkillsChosen,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidCatalog(msg) => {
                write!(f, "Invalid catalog data: {}", msg)
            }
            DomainError::NoEducationChosen => {
                write!(f, "No education level has been chosen")
            }
            DomainError::SkillNotOffered(skill) => {
                write!(f, "Skill not offered for the chosen education level: {}", skill)
            }
            DomainError::NoSkillsChosen => {
                write!(f, "At least one skill must be chosen")
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
