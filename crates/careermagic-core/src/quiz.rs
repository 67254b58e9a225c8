use serde::{Deserialize, Serialize};

use crate::error::CareerMagicError;
use crate::types::{QuizResponses, SkillLevel, SkillRating};

/// The fixed questionnaire skill list, in presentation order.
pub fn skill_catalog() -> Vec<&'static str> {
    vec![
        "JavaScript",
        "Python",
        "SQL",
        "Cloud Computing",
        "UI/UX Design",
        "Database Fundamentals",
        "Computer Architecture",
        "Distributed Computing Systems",
        "Cyber Security",
        "Computer Networking",
        "Software Development",
        "Project Management",
        "Computer Forensic Fundamentals",
        "Technical Communication Skills",
        "Data Science",
        "Troubleshooting",
        "Graphics Design",
    ]
}

pub const TOTAL_STEPS: u8 = 5;

/// Multi-step questionnaire state. Steps: skills, interests, work style,
/// education, extras. Navigation clamps at both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub current_step: u8,
    pub total_steps: u8,
    pub responses: QuizResponses,
}

impl QuizSession {
    pub fn new() -> Self {
        let skills = skill_catalog()
            .into_iter()
            .map(|name| SkillRating {
                name: name.to_string(),
                level: SkillLevel::Unset,
            })
            .collect();
        Self {
            current_step: 1,
            total_steps: TOTAL_STEPS,
            responses: QuizResponses {
                skills,
                ..QuizResponses::default()
            },
        }
    }

    pub fn set_skill(&mut self, name: &str, level: SkillLevel) {
        if let Some(rating) = self
            .responses
            .skills
            .iter_mut()
            .find(|rating| rating.name == name)
        {
            rating.level = level;
        }
    }

    pub fn toggle_interest(&mut self, interest: crate::types::InterestArea) {
        if let Some(index) = self
            .responses
            .interests
            .iter()
            .position(|existing| *existing == interest)
        {
            self.responses.interests.remove(index);
        } else {
            self.responses.interests.push(interest);
        }
    }

    pub fn set_work_style(&mut self, style: crate::types::WorkStyle) {
        self.responses.work_style = style;
    }

    pub fn set_education_level(&mut self, level: crate::types::EducationLevel) {
        self.responses.education_level = level;
    }

    pub fn set_preferred_salary(&mut self, range: impl Into<String>) {
        self.responses.preferred_salary = range.into();
    }

    pub fn set_additional_notes(&mut self, notes: impl Into<String>) {
        self.responses.additional_notes = notes.into();
    }

    pub fn next_step(&mut self) {
        self.current_step = (self.current_step + 1).min(self.total_steps);
    }

    pub fn prev_step(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Completeness check the caller runs before scoring: every skill rated,
    /// at least one interest, work style and education selected.
    pub fn validate(&self) -> Result<(), CareerMagicError> {
        validate_responses(&self.responses)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_responses(responses: &QuizResponses) -> Result<(), CareerMagicError> {
    let unrated: Vec<&str> = responses
        .skills
        .iter()
        .filter(|rating| !rating.level.is_set())
        .map(|rating| rating.name.as_str())
        .collect();
    if !unrated.is_empty() {
        return Err(CareerMagicError::Validation(format!(
            "Please rate all skills. Please select a skill level for: {}",
            unrated.join(", ")
        )));
    }
    if responses.interests.is_empty() {
        return Err(CareerMagicError::Validation(
            "Please select at least one interest area".to_string(),
        ));
    }
    if !responses.work_style.is_set() {
        return Err(CareerMagicError::Validation(
            "Please choose a work style".to_string(),
        ));
    }
    if !responses.education_level.is_set() {
        return Err(CareerMagicError::Validation(
            "Please choose an education level".to_string(),
        ));
    }
    Ok(())
}
