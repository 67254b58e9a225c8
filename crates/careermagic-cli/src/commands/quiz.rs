use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use careermagic_core::catalog::default_catalog;
use careermagic_core::quiz::validate_responses;
use careermagic_core::types::{QuizResponses, ScoredCareer};
use recommender::{CareerRecommender, HybridRecommender};
use reporting::store::{JsonReportStore, ReportStore};
use reporting::QuizReport;

use crate::wizard;

pub struct QuizInputs {
    pub config_path: Option<PathBuf>,
    pub answers: Option<PathBuf>,
    pub name: Option<String>,
    pub no_store: bool,
    pub json: bool,
}

pub fn execute(inputs: QuizInputs) -> Result<()> {
    let (config, paths) = super::load_context(inputs.config_path)?;

    let responses = match &inputs.answers {
        Some(path) => load_answers(path)?,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            wizard::run(&mut input, &mut output)?
        }
    };

    if config.quiz.require_complete {
        validate_responses(&responses)?;
    }
    tracing::debug!(
        rated_skills = responses.selected_skill_names().len(),
        interests = responses.interests.len(),
        "quiz responses collected"
    );

    let catalog = default_catalog();
    let engine = HybridRecommender::from_config(&config.recommender);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("build async runtime")?;

    println!("Analyzing your answers...");
    let results = runtime.block_on(engine.predict_careers(&responses, &catalog));

    if inputs.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("render results JSON")?
        );
    } else {
        print_results(&results);
    }

    if config.reporting.store_reports && !inputs.no_store {
        let report = QuizReport::new(inputs.name, responses, results);
        let store = JsonReportStore::new(paths.report_dir.clone());
        let id = store.save(&report)?;
        println!("Report saved as {id}");
        if config.reporting.human_summary {
            println!("{}", report.human_summary());
        }
    }

    Ok(())
}

fn load_answers(path: &Path) -> Result<QuizResponses> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read answers {}", path.display()))?;
    let responses = toml::from_str(&contents).context("parse answers TOML")?;
    Ok(responses)
}

fn print_results(results: &[ScoredCareer]) {
    if results.is_empty() {
        println!("No career matches were produced.");
        return;
    }

    println!("Your top career matches:");
    for (rank, scored) in results.iter().enumerate() {
        println!();
        println!(
            "{}. {} ({}% match, {} demand)",
            rank + 1,
            scored.career.title,
            scored.match_percentage,
            scored.career.job_market_demand
        );
        println!("   {}", scored.career.short_description);
        for strength in &scored.strengths_match {
            println!("   - {strength}");
        }
    }
    println!();
}
