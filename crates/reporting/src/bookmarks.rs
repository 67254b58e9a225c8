use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::Date;

use careermagic_core::ids::ReportId;
use careermagic_core::types::ScoredCareer;

/// A saved career match. Entries keep enough display data to list without
/// reloading the catalog, plus an optional link back to the report that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkedCareer {
    pub career_id: String,
    pub title: String,
    pub short_description: String,
    pub match_percentage: u8,
    pub custom_name: Option<String>,
    pub report_id: Option<ReportId>,
    pub date: Date,
}

impl BookmarkedCareer {
    pub fn from_scored(scored: &ScoredCareer, date: Date) -> Self {
        Self {
            career_id: scored.career.id.clone(),
            title: scored.career.title.clone(),
            short_description: scored.career.short_description.clone(),
            match_percentage: scored.match_percentage,
            custom_name: None,
            report_id: None,
            date,
        }
    }
}

/// Single-file bookmark collection, rewritten on every mutation.
#[derive(Debug)]
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<BookmarkedCareer>,
}

impl BookmarkStore {
    pub fn load(path: &Path) -> Result<Self> {
        let bookmarks = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read bookmarks {}", path.display()))?;
            serde_json::from_str(&contents).context("parse bookmarks JSON")?
        } else {
            Vec::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            bookmarks,
        })
    }

    pub fn bookmarks(&self) -> &[BookmarkedCareer] {
        &self.bookmarks
    }

    pub fn is_bookmarked(&self, career_id: &str) -> bool {
        self.bookmarks
            .iter()
            .any(|bookmark| bookmark.career_id == career_id)
    }

    /// Add the entry, or remove an existing bookmark for the same career.
    /// Returns true when the entry was added.
    pub fn toggle(&mut self, entry: BookmarkedCareer) -> Result<bool> {
        let added = if self.is_bookmarked(&entry.career_id) {
            self.bookmarks
                .retain(|bookmark| bookmark.career_id != entry.career_id);
            false
        } else {
            self.bookmarks.push(entry);
            true
        };
        self.save()?;
        Ok(added)
    }

    /// Bookmark a whole result set under a custom name, linked to its
    /// report. Existing bookmarks for the same careers are replaced.
    pub fn save_results(
        &mut self,
        entries: Vec<BookmarkedCareer>,
        custom_name: &str,
        report_id: ReportId,
    ) -> Result<()> {
        let tagged: Vec<BookmarkedCareer> = entries
            .into_iter()
            .map(|mut entry| {
                entry.custom_name = Some(custom_name.to_string());
                entry.report_id = Some(report_id);
                entry
            })
            .collect();

        self.bookmarks.retain(|existing| {
            !tagged
                .iter()
                .any(|entry| entry.career_id == existing.career_id)
        });
        self.bookmarks.extend(tagged);
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create bookmarks dir {}", parent.display()))?;
        }
        let contents =
            serde_json::to_string_pretty(&self.bookmarks).context("render bookmarks JSON")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("write bookmarks {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careermagic_core::catalog::default_catalog;

    fn entry(career_id: &str) -> BookmarkedCareer {
        let career = default_catalog()
            .into_iter()
            .find(|career| career.id == career_id)
            .unwrap();
        let scored = ScoredCareer {
            career,
            match_percentage: 75,
            strengths_match: vec!["strength".to_string()],
        };
        let date = Date::from_calendar_date(2026, time::Month::August, 6).unwrap();
        BookmarkedCareer::from_scored(&scored, date)
    }

    #[test]
    fn toggle_adds_then_removes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        let mut store = BookmarkStore::load(&path).unwrap();

        assert!(store.toggle(entry("data-scientist")).unwrap());
        assert!(store.is_bookmarked("data-scientist"));

        assert!(!store.toggle(entry("data-scientist")).unwrap());
        assert!(!store.is_bookmarked("data-scientist"));
    }

    #[test]
    fn bookmarks_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        let mut store = BookmarkStore::load(&path).unwrap();
        store.toggle(entry("devops-engineer")).unwrap();

        let reloaded = BookmarkStore::load(&path).unwrap();
        assert!(reloaded.is_bookmarked("devops-engineer"));
        assert_eq!(reloaded.bookmarks().len(), 1);
    }

    #[test]
    fn save_results_tags_and_replaces_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        let mut store = BookmarkStore::load(&path).unwrap();

        store.toggle(entry("data-scientist")).unwrap();

        let report_id = ReportId::new();
        store
            .save_results(
                vec![entry("data-scientist"), entry("cloud-architect")],
                "dream jobs",
                report_id,
            )
            .unwrap();

        assert_eq!(store.bookmarks().len(), 2);
        for bookmark in store.bookmarks() {
            assert_eq!(bookmark.custom_name.as_deref(), Some("dream jobs"));
            assert_eq!(bookmark.report_id, Some(report_id));
        }
    }
}
