use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;

/// A required input that is missing before a letter can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    FullName,
    Skills,
    Experience,
    JobDescription,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::FullName => "Full name",
            MissingField::Skills => "Skills",
            MissingField::Experience => "Experience",
            MissingField::JobDescription => "Job description",
        }
    }
}

/// Required profile fields that are blank: full name, skills, experience.
pub fn missing_required_fields(profile: &Profile) -> Vec<MissingField> {
    let mut missing = Vec::new();
    if profile.full_name.trim().is_empty() {
        missing.push(MissingField::FullName);
    }
    if profile.skills.trim().is_empty() {
        missing.push(MissingField::Skills);
    }
    if profile.experience.trim().is_empty() {
        missing.push(MissingField::Experience);
    }
    missing
}

/// Everything that blocks generation, profile fields first.
pub fn generation_blockers(profile: Option<&Profile>, job_description: &str) -> Vec<MissingField> {
    let mut missing = match profile {
        Some(p) => missing_required_fields(p),
        None => vec![
            MissingField::FullName,
            MissingField::Skills,
            MissingField::Experience,
        ],
    };
    if job_description.trim().is_empty() {
        missing.push(MissingField::JobDescription);
    }
    missing
}

/// Non-blocking remarks about a profile about to be saved.
pub fn profile_warnings(profile: &Profile) -> Vec<String> {
    let mut warnings = Vec::new();

    let email = profile.email.trim();
    if !email.is_empty() && !email.contains('@') {
        warnings.push(format!("Email '{email}' does not look like an email address"));
    }

    let missing = missing_required_fields(profile);
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(MissingField::label).collect();
        warnings.push(format!(
            "{} must be filled in before a cover letter can be generated",
            labels.join(", ")
        ));
    }

    warnings
}
