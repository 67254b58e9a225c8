use std::path::PathBuf;

use anyhow::Result;
use time::OffsetDateTime;

use careermagic_core::ids::ReportId;
use reporting::bookmarks::{BookmarkStore, BookmarkedCareer};
use reporting::store::{JsonReportStore, ReportStore};
use reporting::QuizReport;

pub enum BookmarkAction {
    List,
    Toggle { report: ReportId, career: String },
    Save { report: ReportId, name: String },
}

pub fn execute(config_path: Option<PathBuf>, action: BookmarkAction) -> Result<()> {
    let (_config, paths) = super::load_context(config_path)?;
    let mut bookmarks = BookmarkStore::load(&paths.bookmarks_path)?;

    match action {
        BookmarkAction::List => {
            if bookmarks.bookmarks().is_empty() {
                println!("No bookmarked careers yet.");
                return Ok(());
            }
            for bookmark in bookmarks.bookmarks() {
                let label = bookmark
                    .custom_name
                    .as_deref()
                    .map(|name| format!(" [{name}]"))
                    .unwrap_or_default();
                println!(
                    "{}  {} ({}% match, saved {}){label}",
                    bookmark.career_id, bookmark.title, bookmark.match_percentage, bookmark.date
                );
            }
            Ok(())
        }
        BookmarkAction::Toggle { report, career } => {
            let report = load_report(&paths.report_dir, &report)?;
            let scored = report
                .results
                .iter()
                .find(|scored| scored.career.id == career)
                .ok_or_else(|| {
                    anyhow::anyhow!("career {career} is not part of report {}", report.id)
                })?;

            let entry = BookmarkedCareer::from_scored(scored, OffsetDateTime::now_utc().date());
            if bookmarks.toggle(entry)? {
                println!("Bookmarked {}", scored.career.title);
            } else {
                println!("Removed bookmark for {}", scored.career.title);
            }
            Ok(())
        }
        BookmarkAction::Save { report, name } => {
            let report = load_report(&paths.report_dir, &report)?;
            let today = OffsetDateTime::now_utc().date();
            let entries: Vec<BookmarkedCareer> = report
                .results
                .iter()
                .map(|scored| BookmarkedCareer::from_scored(scored, today))
                .collect();
            let count = entries.len();

            bookmarks.save_results(entries, &name, report.id)?;
            println!("Saved {count} careers as \"{name}\"");
            Ok(())
        }
    }
}

fn load_report(report_dir: &std::path::Path, id: &ReportId) -> Result<QuizReport> {
    let store = JsonReportStore::new(report_dir.to_path_buf());
    store
        .get(id)?
        .ok_or_else(|| anyhow::anyhow!("no report with id {id}"))
}
