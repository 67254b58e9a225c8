use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub quiz: QuizConfig,
    pub recommender: RecommenderConfig,
    pub accounts: AccountConfig,
    pub reporting: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    pub require_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Artificial scoring delay in milliseconds. The engine simulates the
    /// latency of a remote model; set to 0 to score immediately.
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub seed_demo_user: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub store_reports: bool,
    pub human_summary: bool,
    pub structured_json: bool,
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub report_dir: PathBuf,
    pub bookmarks_path: PathBuf,
    pub users_db_path: PathBuf,
    pub session_path: PathBuf,
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            quiz: QuizConfig {
                require_complete: true,
            },
            recommender: RecommenderConfig { latency_ms: 1500 },
            accounts: AccountConfig {
                seed_demo_user: true,
            },
            reporting: ReportConfig {
                store_reports: true,
                human_summary: true,
                structured_json: true,
            },
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("parse config TOML")?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let output = toml::to_string_pretty(self).context("render config TOML")?;
        Ok(output)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Load the config when present, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let contents = self.to_toml_string()?;
        fs::write(path, contents).with_context(|| format!("write config at {}", path.display()))?;
        Ok(())
    }
}

impl ConfigPaths {
    pub fn resolve() -> Result<Self> {
        let project_dirs = ProjectDirs::from("io", "careermagic", "careermagic")
            .ok_or_else(|| anyhow::anyhow!("unable to determine project directories"))?;
        let config_dir = project_dirs.config_dir();
        let data_dir = project_dirs.data_dir();
        Ok(Self::rooted_at(
            config_dir.join("config.toml"),
            data_dir.to_path_buf(),
        ))
    }

    /// Build the path set from explicit roots. Tests point this at a temp dir.
    pub fn rooted_at(config_path: PathBuf, data_dir: PathBuf) -> Self {
        let report_dir = data_dir.join("reports");
        let bookmarks_path = data_dir.join("bookmarks.json");
        let users_db_path = data_dir.join("users.json");
        let session_path = data_dir.join("session.json");
        Self {
            config_path,
            data_dir,
            report_dir,
            bookmarks_path,
            users_db_path,
            session_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default_config();
        let rendered = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed.recommender.latency_ms, 1500);
        assert!(parsed.reporting.store_reports);
        assert!(parsed.accounts.seed_demo_user);
        assert!(parsed.quiz.require_complete);
    }

    #[test]
    fn paths_derive_from_data_dir() {
        let paths = ConfigPaths::rooted_at(
            PathBuf::from("/tmp/config.toml"),
            PathBuf::from("/tmp/data"),
        );
        assert_eq!(paths.report_dir, PathBuf::from("/tmp/data/reports"));
        assert_eq!(paths.session_path, PathBuf::from("/tmp/data/session.json"));
    }
}
