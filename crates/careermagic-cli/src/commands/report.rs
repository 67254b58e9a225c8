use std::path::PathBuf;

use anyhow::Result;

use careermagic_core::ids::ReportId;
use reporting::json::render_json;
use reporting::store::{JsonReportStore, ReportStore};

pub enum ReportAction {
    List,
    Show { id: ReportId, json: bool },
}

pub fn execute(config_path: Option<PathBuf>, action: ReportAction) -> Result<()> {
    let (_config, paths) = super::load_context(config_path)?;
    let store = JsonReportStore::new(paths.report_dir.clone());

    match action {
        ReportAction::List => {
            let reports = store.list()?;
            if reports.is_empty() {
                println!("No reports saved yet.");
                return Ok(());
            }
            for report in reports {
                println!(
                    "{}  {}  {}",
                    report.id,
                    report.created_at.date(),
                    report.name.as_deref().unwrap_or("(unnamed)")
                );
            }
            Ok(())
        }
        ReportAction::Show { id, json } => {
            let report = store
                .get(&id)?
                .ok_or_else(|| anyhow::anyhow!("no report with id {id}"))?;

            if json {
                println!("{}", render_json(&report));
            } else {
                println!("{}", report.human_summary());
                for scored in &report.results {
                    println!();
                    println!(
                        "{} ({}% match)",
                        scored.career.title, scored.match_percentage
                    );
                    for strength in &scored.strengths_match {
                        println!("  - {strength}");
                    }
                }
            }
            Ok(())
        }
    }
}
