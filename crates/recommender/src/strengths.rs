use careermagic_core::catalog::{Career, MarketDemand, SkillTier};
use careermagic_core::types::{EducationLevel, QuizResponses, SkillLevel};

/// Content similarity above this reads as "strong alignment".
const CONTENT_ALIGNMENT_THRESHOLD: f64 = 15.0;

const MAX_STRENGTHS: usize = 3;
const MAX_SKILL_STRENGTHS: usize = 2;

/// Generic fillers, applied in order until three strengths exist.
const FALLBACK_STRENGTHS: [&str; 5] = [
    "This career path complements your overall skillset",
    "Your combination of skills and interests align with this role",
    "This career offers growth opportunities matching your profile",
    "Your technical foundation provides a good starting point for this path",
    "This role leverages your current abilities while offering growth",
];

/// Education levels that sit inside a career tier's expected bracket.
pub fn expected_education(tier: SkillTier) -> &'static [EducationLevel] {
    match tier {
        SkillTier::Entry => &[EducationLevel::HighSchool, EducationLevel::Associates],
        SkillTier::MidLevel => &[EducationLevel::Bachelors],
        SkillTier::Senior => &[EducationLevel::Masters, EducationLevel::Phd],
    }
}

/// The career tier an education level typically maps to.
pub fn tier_for_education(level: EducationLevel) -> Option<SkillTier> {
    match level {
        EducationLevel::HighSchool | EducationLevel::Associates => Some(SkillTier::Entry),
        EducationLevel::Bachelors => Some(SkillTier::MidLevel),
        EducationLevel::Masters | EducationLevel::Phd => Some(SkillTier::Senior),
        EducationLevel::Unset => None,
    }
}

/// Builds the personalized justification sentences for one scored career.
///
/// Accumulation order: up to two skill sentences, at most one interest
/// sentence, an education-bracket sentence, a content-alignment sentence,
/// a market-demand sentence, then generic fillers. The first three collected
/// sentences win; duplicates are never emitted.
pub fn generate_strength_matches(
    responses: &QuizResponses,
    career: &Career,
    content_similarity: f64,
) -> Vec<String> {
    let mut strengths: Vec<String> = Vec::new();

    for rating in responses.proficient_skills() {
        let needle = rating.name.to_lowercase();
        let required = career
            .requirements
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle));
        if required {
            let sentence = if rating.level == SkillLevel::Advanced {
                format!(
                    "Your advanced {} expertise is highly valuable for this role",
                    rating.name
                )
            } else {
                format!("Your {} skills align well with this career path", rating.name)
            };
            strengths.push(sentence);
            if strengths.len() >= MAX_SKILL_STRENGTHS {
                break;
            }
        }
    }

    let title = career.title.to_lowercase();
    let description = career.description.to_lowercase();
    for interest in &responses.interests {
        let needle = interest.to_string().to_lowercase();
        if title.contains(&needle) || description.contains(&needle) {
            strengths.push(format!(
                "Your interest in {interest} matches this career's focus"
            ));
            break;
        }
    }

    if tier_for_education(responses.education_level) == Some(career.skill_level) {
        let sentence = match responses.education_level {
            EducationLevel::Masters | EducationLevel::Phd => format!(
                "Your advanced education is ideal for this {} position",
                career.skill_level
            ),
            level => format!("Your {level} education aligns with this career level"),
        };
        strengths.push(sentence);
    }

    if content_similarity > CONTENT_ALIGNMENT_THRESHOLD && strengths.len() < MAX_STRENGTHS {
        strengths
            .push("Your overall profile shows strong alignment with this career path".to_string());
    }

    if career.job_market_demand == MarketDemand::High && strengths.len() < MAX_STRENGTHS {
        strengths.push("This field has high market demand for qualified professionals".to_string());
    }

    if strengths.len() < MAX_STRENGTHS {
        for fallback in FALLBACK_STRENGTHS {
            if strengths.len() >= MAX_STRENGTHS {
                break;
            }
            if !strengths.iter().any(|existing| existing == fallback) {
                strengths.push(fallback.to_string());
            }
        }
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}
