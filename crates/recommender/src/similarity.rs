use std::collections::HashMap;

use careermagic_core::catalog::{Career, SkillTier};
use careermagic_core::types::QuizResponses;

/// Tokens shorter than this are dropped from both sides.
const MIN_TERM_LEN: usize = 3;

/// Work environment is not modeled on careers; both profiles carry a fixed
/// placeholder in that slot.
const WORK_ENVIRONMENT_PLACEHOLDER: f64 = 0.5;

/// Term-frequency table over lowercase whitespace-split tokens.
fn term_frequencies<T: AsRef<str>>(texts: &[T]) -> HashMap<String, u32> {
    let mut frequencies = HashMap::new();
    for text in texts {
        for term in text.as_ref().to_lowercase().split_whitespace() {
            if term.chars().count() >= MIN_TERM_LEN {
                *frequencies.entry(term.to_string()).or_insert(0) += 1;
            }
        }
    }
    frequencies
}

/// Term-overlap similarity between the user's profile text and a career's
/// text content. Each career-side occurrence of a user term earns
/// `freq * (1 + ln(1 + 1/freq))` credit, so terms the user mentioned rarely
/// are up-weighted per occurrence while repeated matches still accumulate.
/// The raw sum is used directly; there is no document-length normalization.
pub fn content_similarity<U: AsRef<str>, C: AsRef<str>>(
    user_content: &[U],
    career_content: &[C],
) -> f64 {
    let frequencies = term_frequencies(user_content);
    let mut similarity = 0.0;

    for text in career_content {
        for term in text.as_ref().to_lowercase().split_whitespace() {
            if term.chars().count() < MIN_TERM_LEN {
                continue;
            }
            if let Some(&count) = frequencies.get(term) {
                let frequency = f64::from(count);
                similarity += frequency * (1.0 + (1.0 + 1.0 / frequency).ln());
            }
        }
    }

    similarity
}

/// Euclidean-distance similarity between two numeric profiles, mapped to
/// `100 / (1 + sqrt(distance))`. Mismatched dimensions score zero rather
/// than failing; callers rely on that degradation.
pub fn cluster_similarity(user_profile: &[f64], career_profile: &[f64]) -> f64 {
    if user_profile.len() != career_profile.len() {
        tracing::warn!(
            user_len = user_profile.len(),
            career_len = career_profile.len(),
            "profile dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let distance: f64 = user_profile
        .iter()
        .zip(career_profile.iter())
        .map(|(user, career)| (user - career).powi(2))
        .sum();

    100.0 / (1.0 + distance.sqrt())
}

/// Text fields that feed the user side of the term-overlap score: the rated
/// skill names, the interest labels, and the free-form notes.
pub fn user_content(responses: &QuizResponses) -> Vec<String> {
    let mut content: Vec<String> = responses
        .selected_skill_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    content.extend(responses.interests.iter().map(|interest| interest.to_string()));
    if !responses.additional_notes.is_empty() {
        content.push(responses.additional_notes.clone());
    }
    content
}

/// Text fields that feed the career side: title, description, required
/// skills, and the required-education sentence.
pub fn career_content(career: &Career) -> Vec<&str> {
    let mut content = vec![career.title.as_str(), career.description.as_str()];
    content.extend(career.requirements.skills.iter().map(String::as_str));
    content.push(career.requirements.education.as_str());
    content
}

/// Three-dimensional user profile: mean per-skill score, education score,
/// work-style preference. Careers carry no per-skill ratings, so the skill
/// slots collapse to their mean to line up with [`career_profile`]. The
/// shapes are intentionally left this way; see the cluster notes in
/// DESIGN.md before changing them.
pub fn user_profile(responses: &QuizResponses) -> Vec<f64> {
    let mean_skill = if responses.skills.is_empty() {
        0.0
    } else {
        let total: f64 = responses
            .skills
            .iter()
            .map(|rating| rating.level.score())
            .sum();
        total / responses.skills.len() as f64
    };

    vec![
        mean_skill,
        responses.education_level.score(),
        responses.work_style.preference(),
    ]
}

/// Three-dimensional career profile: tier score, education-requirement
/// score, and the fixed work-environment placeholder.
pub fn career_profile(career: &Career) -> Vec<f64> {
    let tier_score = match career.skill_level {
        SkillTier::Entry => 1.0,
        SkillTier::MidLevel => 3.0,
        SkillTier::Senior => 5.0,
    };

    let education = &career.requirements.education;
    let education_score = if education.contains("Bachelor") {
        3.0
    } else if education.contains("Master") {
        4.5
    } else if education.contains("PhD") {
        5.5
    } else {
        1.0
    };

    vec![tier_score, education_score, WORK_ENVIRONMENT_PLACEHOLDER]
}

#[cfg(test)]
mod tests {
    use super::*;
    use careermagic_core::catalog::default_catalog;
    use careermagic_core::types::{
        EducationLevel, InterestArea, SkillLevel, SkillRating, WorkStyle,
    };

    fn responses_with(skills: &[(&str, SkillLevel)]) -> QuizResponses {
        QuizResponses {
            skills: skills
                .iter()
                .map(|(name, level)| SkillRating {
                    name: name.to_string(),
                    level: *level,
                })
                .collect(),
            ..QuizResponses::default()
        }
    }

    #[test]
    fn short_terms_are_ignored_on_both_sides() {
        let similarity = content_similarity(&["Go R C"], &["Go R C Go"]);
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn single_mention_earns_inverse_frequency_credit() {
        // One user mention, one career occurrence: 1 * (1 + ln 2).
        let similarity = content_similarity(&["python"], &["python"]);
        assert!((similarity - (1.0 + 2.0_f64.ln())).abs() < 1e-9);
    }

    #[test]
    fn repeated_career_occurrences_accumulate() {
        let once = content_similarity(&["python"], &["python"]);
        let twice = content_similarity(&["python"], &["python python"]);
        assert!((twice - 2.0 * once).abs() < 1e-9);
    }

    #[test]
    fn frequent_user_terms_earn_less_per_occurrence() {
        let rare = content_similarity(&["python"], &["python"]);
        let frequent = content_similarity(&["python python python"], &["python"]);
        // Total credit grows with frequency, but per-occurrence weight shrinks.
        assert!(frequent > rare);
        assert!(frequent / 3.0 < rare);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let similarity = content_similarity(&["Python"], &["PYTHON scripting"]);
        assert!(similarity > 0.0);
    }

    #[test]
    fn cluster_similarity_peaks_on_identical_profiles() {
        let profile = vec![3.0, 3.5, 0.5];
        assert_eq!(cluster_similarity(&profile, &profile), 100.0);
    }

    #[test]
    fn cluster_similarity_returns_zero_on_dimension_mismatch() {
        let user = vec![1.0, 2.0, 3.0, 4.0];
        let career = vec![1.0, 2.0, 3.0];
        assert_eq!(cluster_similarity(&user, &career), 0.0);
    }

    #[test]
    fn cluster_similarity_decreases_with_distance() {
        let user = vec![1.0, 1.0, 0.0];
        let near = vec![1.0, 2.0, 0.0];
        let far = vec![5.0, 5.5, 0.5];
        assert!(cluster_similarity(&user, &near) > cluster_similarity(&user, &far));
    }

    #[test]
    fn user_content_skips_unset_skills_and_empty_notes() {
        let mut responses = responses_with(&[
            ("Python", SkillLevel::Advanced),
            ("SQL", SkillLevel::Unset),
        ]);
        responses.interests = vec![InterestArea::Data];

        let content = user_content(&responses);
        assert_eq!(content, vec!["Python".to_string(), "Data".to_string()]);

        responses.additional_notes = "machine learning".to_string();
        assert_eq!(user_content(&responses).len(), 3);
    }

    #[test]
    fn user_profile_averages_skill_scores() {
        let mut responses = responses_with(&[
            ("Python", SkillLevel::Advanced),
            ("SQL", SkillLevel::Beginner),
        ]);
        responses.education_level = EducationLevel::Masters;
        responses.work_style = WorkStyle::Hybrid;

        assert_eq!(user_profile(&responses), vec![3.0, 4.5, 0.5]);
    }

    #[test]
    fn empty_skill_list_yields_zero_mean() {
        let responses = QuizResponses::default();
        assert_eq!(user_profile(&responses)[0], 0.0);
    }

    #[test]
    fn career_profiles_follow_tier_and_education_text() {
        let catalog = default_catalog();
        let data_scientist = catalog
            .iter()
            .find(|career| career.id == "data-scientist")
            .unwrap();
        // Mid-Level tier, "Master's degree ..." education text.
        assert_eq!(career_profile(data_scientist), vec![3.0, 4.5, 0.5]);

        let software_engineer = catalog
            .iter()
            .find(|career| career.id == "software-engineer")
            .unwrap();
        assert_eq!(career_profile(software_engineer), vec![1.0, 3.0, 0.5]);
    }
}
