//! Career recommendation scoring.
//!
//! The scorer is a deterministic hybrid heuristic: a term-overlap content
//! score plus a distance-based profile score, combined with a fixed-weight
//! ensemble and a pair of flat bonuses. The weights and caps are part of
//! the scoring contract; changing them changes every persisted report.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use careermagic_core::catalog::{Career, MarketDemand};
use careermagic_core::config::RecommenderConfig;
use careermagic_core::types::{QuizResponses, ScoredCareer};

pub mod similarity;
pub mod strengths;

use similarity::{career_content, career_profile, cluster_similarity, content_similarity, user_content, user_profile};
use strengths::{expected_education, generate_strength_matches};

const BASE_SCORE: f64 = 30.0;
const CONTENT_WEIGHT: f64 = 2.0;
const CONTENT_CAP: f64 = 40.0;
const CLUSTER_DIVISOR: f64 = 5.0;
const CLUSTER_CAP: f64 = 20.0;
const EDUCATION_BONUS: f64 = 5.0;
const DEMAND_BONUS: f64 = 5.0;
const MAX_RESULTS: usize = 5;

/// The scorer contract: a pure transform from quiz answers and a read-only
/// catalog to a ranked, capped list of matches. Implementations never fail;
/// an empty catalog produces an empty result.
///
/// Carried behind `dyn CareerRecommender` so callers can swap engines
/// without touching orchestration code.
#[async_trait]
pub trait CareerRecommender: Send + Sync {
    async fn predict_careers(
        &self,
        responses: &QuizResponses,
        catalog: &[Career],
    ) -> Vec<ScoredCareer>;
}

/// The default engine. Holds only the artificial latency used to simulate a
/// remote model; scoring itself is synchronous arithmetic.
pub struct HybridRecommender {
    latency: Duration,
}

impl HybridRecommender {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self::new(Duration::from_millis(config.latency_ms))
    }

    /// An engine with no simulated latency, for tests and batch callers.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl CareerRecommender for HybridRecommender {
    async fn predict_careers(
        &self,
        responses: &QuizResponses,
        catalog: &[Career],
    ) -> Vec<ScoredCareer> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        debug!(
            rated_skills = responses.selected_skill_names().len(),
            interests = responses.interests.len(),
            catalog_size = catalog.len(),
            "scoring quiz responses"
        );

        let mut scored: Vec<ScoredCareer> = catalog
            .iter()
            .map(|career| score_career(responses, career))
            .collect();

        // Stable sort: equal scores keep their catalog order.
        scored.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        scored.truncate(MAX_RESULTS);

        debug!(results = scored.len(), "careers scored and ranked");
        scored
    }
}

fn score_career(responses: &QuizResponses, career: &Career) -> ScoredCareer {
    let user_text = user_content(responses);
    let content = content_similarity(&user_text, &career_content(career));
    let cluster = cluster_similarity(&user_profile(responses), &career_profile(career));

    let mut score = BASE_SCORE;
    score += (content * CONTENT_WEIGHT).min(CONTENT_CAP);
    score += (cluster / CLUSTER_DIVISOR).min(CLUSTER_CAP);

    if expected_education(career.skill_level).contains(&responses.education_level) {
        score += EDUCATION_BONUS;
    }
    if career.job_market_demand == MarketDemand::High {
        score += DEMAND_BONUS;
    }

    // Round first, then cap. The base score keeps the practical floor at 30;
    // there is no symmetric floor clamp.
    let match_percentage = score.round().min(100.0) as u8;
    let strengths_match = generate_strength_matches(responses, career, content);

    ScoredCareer {
        career: career.clone(),
        match_percentage,
        strengths_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careermagic_core::catalog::default_catalog;
    use careermagic_core::quiz::skill_catalog;
    use careermagic_core::types::{
        EducationLevel, InterestArea, SkillLevel, SkillRating, WorkStyle,
    };

    fn blank_responses() -> QuizResponses {
        QuizResponses {
            skills: skill_catalog()
                .into_iter()
                .map(|name| SkillRating {
                    name: name.to_string(),
                    level: SkillLevel::Unset,
                })
                .collect(),
            ..QuizResponses::default()
        }
    }

    fn data_profile() -> QuizResponses {
        let mut responses = blank_responses();
        for rating in &mut responses.skills {
            if rating.name == "Python" {
                rating.level = SkillLevel::Advanced;
            }
        }
        responses.interests = vec![InterestArea::Data];
        responses.work_style = WorkStyle::Remote;
        responses.education_level = EducationLevel::Masters;
        responses
    }

    #[tokio::test]
    async fn data_profile_ranks_data_scientist_first() {
        let engine = HybridRecommender::instant();
        let results = engine
            .predict_careers(&data_profile(), &default_catalog())
            .await;

        assert_eq!(results[0].career.id, "data-scientist");
        assert!(results[0].match_percentage > 50);
        assert!(results[0]
            .strengths_match
            .iter()
            .any(|s| s == "Your advanced Python expertise is highly valuable for this role"));
    }

    #[tokio::test]
    async fn match_percentages_stay_in_bounds() {
        let engine = HybridRecommender::instant();
        for responses in [blank_responses(), data_profile(), QuizResponses::default()] {
            let results = engine.predict_careers(&responses, &default_catalog()).await;
            for scored in &results {
                assert!(scored.match_percentage <= 100);
                let count = scored.strengths_match.len();
                assert!((1..=3).contains(&count));
            }
        }
    }

    #[tokio::test]
    async fn unrated_skills_cluster_near_the_base_score() {
        let engine = HybridRecommender::instant();
        let results = engine
            .predict_careers(&blank_responses(), &default_catalog())
            .await;

        for scored in &results {
            assert!(scored.match_percentage >= 30);
            assert!(scored.match_percentage <= 50);
        }
    }

    #[tokio::test]
    async fn results_are_capped_at_five_and_catalog_length() {
        let engine = HybridRecommender::instant();
        let catalog = default_catalog();

        let results = engine.predict_careers(&blank_responses(), &catalog).await;
        assert_eq!(results.len(), 5);

        let two: Vec<Career> = catalog.into_iter().take(2).collect();
        let results = engine.predict_careers(&blank_responses(), &two).await;
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_results() {
        let engine = HybridRecommender::instant();
        let results = engine.predict_careers(&blank_responses(), &[]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn results_are_sorted_descending() {
        let engine = HybridRecommender::instant();
        let results = engine
            .predict_careers(&data_profile(), &default_catalog())
            .await;

        for pair in results.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[tokio::test]
    async fn equal_scores_preserve_catalog_order() {
        let catalog = default_catalog();
        let mut first = catalog[0].clone();
        first.id = "first-twin".to_string();
        let mut second = catalog[0].clone();
        second.id = "second-twin".to_string();

        let engine = HybridRecommender::instant();
        let results = engine
            .predict_careers(&blank_responses(), &[first, second])
            .await;

        assert_eq!(results[0].match_percentage, results[1].match_percentage);
        assert_eq!(results[0].career.id, "first-twin");
        assert_eq!(results[1].career.id, "second-twin");
    }

    #[tokio::test]
    async fn scoring_is_deterministic() {
        let engine = HybridRecommender::instant();
        let catalog = default_catalog();
        let responses = data_profile();

        let first = engine.predict_careers(&responses, &catalog).await;
        let second = engine.predict_careers(&responses, &catalog).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn inputs_are_not_mutated() {
        let engine = HybridRecommender::instant();
        let catalog = default_catalog();
        let responses = data_profile();
        let catalog_before = catalog.clone();
        let responses_before = responses.clone();

        let _ = engine.predict_careers(&responses, &catalog).await;
        assert_eq!(catalog, catalog_before);
        assert_eq!(responses, responses_before);
    }

    #[tokio::test]
    async fn notes_feed_the_content_score() {
        let engine = HybridRecommender::instant();
        let catalog = default_catalog();

        let plain = blank_responses();
        let mut with_notes = blank_responses();
        with_notes.additional_notes =
            "I enjoy cloud infrastructure and kubernetes automation".to_string();

        let baseline = engine.predict_careers(&plain, &catalog).await;
        let noted = engine.predict_careers(&with_notes, &catalog).await;

        let devops_baseline = baseline
            .iter()
            .find(|scored| scored.career.id == "devops-engineer")
            .map(|scored| scored.match_percentage);
        let devops_noted = noted
            .iter()
            .find(|scored| scored.career.id == "devops-engineer")
            .map(|scored| scored.match_percentage);
        if let (Some(before), Some(after)) = (devops_baseline, devops_noted) {
            assert!(after >= before);
        }
    }
}
