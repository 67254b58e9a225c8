use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use careermagic_core::catalog::MarketDemand;
use careermagic_core::ids::ReportId;
use careermagic_core::types::{QuizResponses, ScoredCareer};

pub mod bookmarks;
pub mod json;
pub mod store;

/// A persisted snapshot of one quiz run: the answers given and the matches
/// the scorer produced for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    pub id: ReportId,
    pub name: Option<String>,
    pub created_at: OffsetDateTime,
    pub responses: QuizResponses,
    pub results: Vec<ScoredCareer>,
    pub stats: ReportStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_matches: u32,
    pub best_title: Option<String>,
    pub best_percentage: u8,
    pub average_percentage: u8,
    pub high_demand_matches: u32,
}

impl QuizReport {
    pub fn new(
        name: Option<String>,
        responses: QuizResponses,
        results: Vec<ScoredCareer>,
    ) -> Self {
        let stats = ReportStats::from_results(&results);
        Self {
            id: ReportId::new(),
            name,
            created_at: OffsetDateTime::now_utc(),
            responses,
            results,
            stats,
        }
    }

    pub fn human_summary(&self) -> String {
        let heading = match &self.name {
            Some(name) => format!("Report \"{name}\""),
            None => "Quiz report".to_string(),
        };

        let top_line = match &self.stats.best_title {
            Some(title) => format!(
                "Top match: {title} ({}%).",
                self.stats.best_percentage
            ),
            None => "No career matches were produced.".to_string(),
        };

        let demand_line = match self.stats.high_demand_matches {
            0 => "None of the matched fields are in high market demand.".to_string(),
            1 => "1 matched field is in high market demand.".to_string(),
            count => format!("{count} matched fields are in high market demand."),
        };

        format!(
            "{heading} from {date}: {count} career matches.\n{top_line}\n{demand_line}",
            date = self.created_at.date(),
            count = self.stats.total_matches,
        )
    }
}

impl ReportStats {
    pub fn from_results(results: &[ScoredCareer]) -> Self {
        let mut stats = ReportStats {
            total_matches: 0,
            best_title: None,
            best_percentage: 0,
            average_percentage: 0,
            high_demand_matches: 0,
        };

        let mut percentage_total: u32 = 0;
        for scored in results {
            stats.total_matches = stats.total_matches.saturating_add(1);
            percentage_total += u32::from(scored.match_percentage);
            if scored.career.job_market_demand == MarketDemand::High {
                stats.high_demand_matches = stats.high_demand_matches.saturating_add(1);
            }
            if scored.match_percentage > stats.best_percentage || stats.best_title.is_none() {
                stats.best_percentage = scored.match_percentage;
                stats.best_title = Some(scored.career.title.clone());
            }
        }

        if stats.total_matches > 0 {
            stats.average_percentage = (percentage_total / stats.total_matches) as u8;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careermagic_core::catalog::default_catalog;

    fn scored(id: &str, match_percentage: u8) -> ScoredCareer {
        let career = default_catalog()
            .into_iter()
            .find(|career| career.id == id)
            .unwrap();
        ScoredCareer {
            career,
            match_percentage,
            strengths_match: vec!["placeholder strength".to_string()],
        }
    }

    #[test]
    fn stats_track_best_average_and_demand() {
        let results = vec![
            scored("software-engineer", 60),
            scored("data-scientist", 80),
            scored("ux-designer", 40),
        ];
        let stats = ReportStats::from_results(&results);

        assert_eq!(stats.total_matches, 3);
        assert_eq!(stats.best_title.as_deref(), Some("Data Scientist"));
        assert_eq!(stats.best_percentage, 80);
        assert_eq!(stats.average_percentage, 60);
        // UX Designer is Medium demand, the other two are High.
        assert_eq!(stats.high_demand_matches, 2);
    }

    #[test]
    fn stats_on_empty_results_are_zeroed() {
        let stats = ReportStats::from_results(&[]);
        assert_eq!(stats.total_matches, 0);
        assert!(stats.best_title.is_none());
        assert_eq!(stats.average_percentage, 0);
    }

    #[test]
    fn human_summary_names_the_top_match() {
        let report = QuizReport::new(
            Some("spring check-in".to_string()),
            QuizResponses::default(),
            vec![scored("data-scientist", 72)],
        );
        let summary = report.human_summary();
        assert!(summary.contains("Report \"spring check-in\""));
        assert!(summary.contains("Top match: Data Scientist (72%)."));
        assert!(summary.contains("1 matched field is in high market demand."));
    }

    #[test]
    fn human_summary_handles_empty_results() {
        let report = QuizReport::new(None, QuizResponses::default(), vec![]);
        let summary = report.human_summary();
        assert!(summary.contains("Quiz report"));
        assert!(summary.contains("No career matches were produced."));
    }
}
