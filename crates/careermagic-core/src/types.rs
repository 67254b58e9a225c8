use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Career;

/// Proficiency a user assigns to a single skill. `Unset` serializes as the
/// empty string so persisted answers stay compatible with partially filled
/// questionnaires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    #[serde(rename = "")]
    Unset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestArea {
    Programming,
    Data,
    Design,
    Infrastructure,
    Security,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkStyle {
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    OnSite,
    #[default]
    #[serde(rename = "")]
    Unset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Associate's")]
    Associates,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// One rated skill. Ratings are kept as an ordered sequence rather than a
/// map: downstream strength generation walks them in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizResponses {
    pub skills: Vec<SkillRating>,
    pub interests: Vec<InterestArea>,
    pub work_style: WorkStyle,
    pub education_level: EducationLevel,
    #[serde(default)]
    pub preferred_salary: String,
    #[serde(default)]
    pub additional_notes: String,
}

/// A catalog entry annotated with the scorer's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCareer {
    #[serde(flatten)]
    pub career: Career,
    pub match_percentage: u8,
    pub strengths_match: Vec<String>,
}

impl SkillLevel {
    /// Numeric value used by the profile-clustering step.
    pub fn score(&self) -> f64 {
        match self {
            SkillLevel::Beginner => 1.0,
            SkillLevel::Intermediate => 3.0,
            SkillLevel::Advanced => 5.0,
            SkillLevel::Unset => 0.0,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, SkillLevel::Unset)
    }
}

impl EducationLevel {
    /// Numeric value used by the profile-clustering step.
    pub fn score(&self) -> f64 {
        match self {
            EducationLevel::HighSchool => 1.0,
            EducationLevel::Associates => 2.0,
            EducationLevel::Bachelors => 3.5,
            EducationLevel::Masters => 4.5,
            EducationLevel::Phd => 5.5,
            EducationLevel::Unset => 0.0,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, EducationLevel::Unset)
    }
}

impl WorkStyle {
    /// Remote-work preference scalar for the profile vector.
    pub fn preference(&self) -> f64 {
        match self {
            WorkStyle::Remote => 1.0,
            WorkStyle::Hybrid => 0.5,
            WorkStyle::OnSite | WorkStyle::Unset => 0.0,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, WorkStyle::Unset)
    }
}

impl QuizResponses {
    /// Names of skills the user actually rated, in questionnaire order.
    pub fn selected_skill_names(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|rating| rating.level.is_set())
            .map(|rating| rating.name.as_str())
            .collect()
    }

    /// Skills rated Intermediate or Advanced, in questionnaire order.
    pub fn proficient_skills(&self) -> Vec<&SkillRating> {
        self.skills
            .iter()
            .filter(|rating| {
                matches!(rating.level, SkillLevel::Intermediate | SkillLevel::Advanced)
            })
            .collect()
    }

    pub fn rating(&self, name: &str) -> Option<SkillLevel> {
        self.skills
            .iter()
            .find(|rating| rating.name == name)
            .map(|rating| rating.level)
    }
}

impl fmt::Display for InterestArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            InterestArea::Programming => "Programming",
            InterestArea::Data => "Data",
            InterestArea::Design => "Design",
            InterestArea::Infrastructure => "Infrastructure",
            InterestArea::Security => "Security",
        };
        write!(f, "{value}")
    }
}

impl FromStr for InterestArea {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "programming" => Ok(InterestArea::Programming),
            "data" => Ok(InterestArea::Data),
            "design" => Ok(InterestArea::Design),
            "infrastructure" => Ok(InterestArea::Infrastructure),
            "security" => Ok(InterestArea::Security),
            _ => Err(format!("unknown interest area: {value}")),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Unset => "",
        };
        write!(f, "{value}")
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "" => Ok(SkillLevel::Unset),
            _ => Err(format!("unknown skill level: {value}")),
        }
    }
}

impl fmt::Display for WorkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            WorkStyle::Remote => "Remote",
            WorkStyle::Hybrid => "Hybrid",
            WorkStyle::OnSite => "On-site",
            WorkStyle::Unset => "",
        };
        write!(f, "{value}")
    }
}

impl FromStr for WorkStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "remote" => Ok(WorkStyle::Remote),
            "hybrid" => Ok(WorkStyle::Hybrid),
            "on-site" | "onsite" => Ok(WorkStyle::OnSite),
            "" => Ok(WorkStyle::Unset),
            _ => Err(format!("unknown work style: {value}")),
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Associates => "Associate's",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Masters => "Master's",
            EducationLevel::Phd => "PhD",
            EducationLevel::Unset => "",
        };
        write!(f, "{value}")
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "high school" => Ok(EducationLevel::HighSchool),
            "associate's" | "associates" => Ok(EducationLevel::Associates),
            "bachelor's" | "bachelors" => Ok(EducationLevel::Bachelors),
            "master's" | "masters" => Ok(EducationLevel::Masters),
            "phd" => Ok(EducationLevel::Phd),
            "" => Ok(EducationLevel::Unset),
            _ => Err(format!("unknown education level: {value}")),
        }
    }
}
