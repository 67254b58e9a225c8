use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use careermagic_core::ids::ReportId;

use crate::QuizReport;

/// Typed report repository. Callers never see storage keys or file layout.
pub trait ReportStore {
    fn save(&self, report: &QuizReport) -> Result<ReportId>;
    fn get(&self, id: &ReportId) -> Result<Option<QuizReport>>;
    fn list(&self) -> Result<Vec<QuizReport>>;
}

/// One pretty-printed JSON file per report under the report directory.
#[derive(Debug, Clone)]
pub struct JsonReportStore {
    report_dir: PathBuf,
}

impl JsonReportStore {
    pub fn new(report_dir: PathBuf) -> Self {
        Self { report_dir }
    }

    fn report_path(&self, id: &ReportId) -> PathBuf {
        self.report_dir.join(format!("{id}.json"))
    }
}

impl ReportStore for JsonReportStore {
    fn save(&self, report: &QuizReport) -> Result<ReportId> {
        fs::create_dir_all(&self.report_dir)
            .with_context(|| format!("create report dir {}", self.report_dir.display()))?;

        let path = self.report_path(&report.id);
        let contents = serde_json::to_string_pretty(report).context("render report JSON")?;
        fs::write(&path, contents)
            .with_context(|| format!("write report {}", path.display()))?;
        Ok(report.id)
    }

    fn get(&self, id: &ReportId) -> Result<Option<QuizReport>> {
        let path = self.report_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let report = read_report(&path)?;
        Ok(Some(report))
    }

    fn list(&self) -> Result<Vec<QuizReport>> {
        if !self.report_dir.exists() {
            return Ok(Vec::new());
        }

        let mut reports = Vec::new();
        for entry in WalkDir::new(&self.report_dir).min_depth(1).max_depth(1) {
            let entry = entry.context("scan report dir")?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().map(|ext| ext == "json").unwrap_or(false)
            {
                reports.push(read_report(path)?);
            }
        }

        reports.sort_by_key(|report| report.created_at);
        Ok(reports)
    }
}

fn read_report(path: &Path) -> Result<QuizReport> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read report {}", path.display()))?;
    let report = serde_json::from_str(&contents)
        .with_context(|| format!("parse report JSON {}", path.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use careermagic_core::types::QuizResponses;

    fn store(dir: &tempfile::TempDir) -> JsonReportStore {
        JsonReportStore::new(dir.path().join("reports"))
    }

    #[test]
    fn save_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let report = QuizReport::new(
            Some("first run".to_string()),
            QuizResponses::default(),
            vec![],
        );
        let id = store.save(&report).unwrap();

        let loaded = store.get(&id).unwrap().unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.name.as_deref(), Some("first run"));
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert!(store.get(&ReportId::new()).unwrap().is_none());
    }

    #[test]
    fn list_on_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_returns_saved_reports_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let mut first = QuizReport::new(None, QuizResponses::default(), vec![]);
        let mut second = QuizReport::new(None, QuizResponses::default(), vec![]);
        first.created_at = time::OffsetDateTime::UNIX_EPOCH;
        second.created_at = time::OffsetDateTime::UNIX_EPOCH + time::Duration::days(1);
        store.save(&second).unwrap();
        store.save(&first).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }
}
