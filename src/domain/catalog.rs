//! Compiled-in reference data: skills offered per education level and
//! the fixed list of job postings.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{EducationLevel, JobPosting, ALL_LEVELS};

const TENTH_SKILLS: &[&str] = &[
    "Computer Basics",
    "Communication",
    "Basic Math",
    "Language Skills",
    "Problem Solving",
];

const INTERMEDIATE_SKILLS: &[&str] = &[
    "Programming Basics",
    "Web Basics",
    "Advanced Math",
    "Science",
    "Data Analysis",
];

const BTECH_SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "Java",
    "Machine Learning",
    "Cloud Computing",
    "DevOps",
    "Data Science",
];

const JOB_POSTINGS: &[JobPosting] = &[
    JobPosting {
        organization: "TechCorp",
        role: "Junior Software Developer",
        location: "Hyderabad",
        required_skills: &["React", "Node.js"],
        experience: "0-2 years",
        compensation: "5-8 LPA",
    },
    JobPosting {
        organization: "DataTech Solutions",
        role: "Data Scientist",
        location: "Bangalore",
        required_skills: &["Python", "Machine Learning"],
        experience: "1-3 years",
        compensation: "8-12 LPA",
    },
    JobPosting {
        organization: "CloudServe",
        role: "Cloud Engineer",
        location: "Mumbai",
        required_skills: &["Cloud Computing", "DevOps"],
        experience: "0-2 years",
        compensation: "6-10 LPA",
    },
];

/// Skills offered for an education level, in display order.
pub fn skills_for(level: EducationLevel) -> &'static [&'static str] {
    match level {
        EducationLevel::TenthStandard => TENTH_SKILLS,
        EducationLevel::Intermediate => INTERMEDIATE_SKILLS,
        EducationLevel::BTech => BTECH_SKILLS,
    }
}

/// The fixed posting list, identical on every call.
pub fn job_postings() -> &'static [JobPosting] {
    JOB_POSTINGS
}

/// Checks the compiled-in data once at startup.
///
/// A failure here is a defect in the catalog itself, not a runtime
/// condition: the caller should refuse to start rather than try to
/// recover.
pub fn validate() -> DomainResult<()> {
    for level in ALL_LEVELS {
        let skills = skills_for(level);
        if skills.is_empty() {
            return Err(DomainError::InvalidCatalog(format!(
                "no skills listed for {}",
                level.label()
            )));
        }
        for (i, skill) in skills.iter().enumerate() {
            if skill.is_empty() {
                return Err(DomainError::InvalidCatalog(format!(
                    "empty skill label for {}",
                    level.label()
                )));
            }
            if skills[..i].contains(skill) {
                return Err(DomainError::InvalidCatalog(format!(
                    "duplicate skill '{}' for {}",
                    skill,
                    level.label()
                )));
            }
        }
    }

    for posting in job_postings() {
        if posting.required_skills.is_empty() {
            return Err(DomainError::InvalidCatalog(format!(
                "posting '{}' at {} lists no required skills",
                posting.role, posting.organization
            )));
        }
        if posting.organization.is_empty() || posting.role.is_empty() {
            return Err(DomainError::InvalidCatalog(
                "posting with empty organization or role".to_string(),
            ));
        }
    }

    Ok(())
}
