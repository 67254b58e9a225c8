pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod quiz;
pub mod types;

pub use catalog::{default_catalog, find_career, Career, CareerRequirements, Course, MarketDemand, SalaryRange, SkillTier};
pub use config::{Config, ConfigPaths};
pub use error::CareerMagicError;
pub use ids::{ReportId, UserId};
pub use quiz::{skill_catalog, validate_responses, QuizSession};
pub use types::{EducationLevel, InterestArea, QuizResponses, ScoredCareer, SkillLevel, SkillRating, WorkStyle};
