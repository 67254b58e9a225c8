use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::PublicUser;

/// The signed-in user, persisted so the CLI stays logged in across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: PublicUser,
    pub logged_in_at: OffsetDateTime,
}

impl Session {
    pub fn new(user: PublicUser) -> Self {
        Self {
            user,
            logged_in_at: OffsetDateTime::now_utc(),
        }
    }

    /// Load the persisted session, if any. A corrupt session file is treated
    /// as signed-out rather than an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read session {}", path.display()))?;
        match serde_json::from_str(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(_) => {
                fs::remove_file(path)
                    .with_context(|| format!("remove corrupt session {}", path.display()))?;
                Ok(None)
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create session dir {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("render session JSON")?;
        fs::write(path, contents)
            .with_context(|| format!("write session {}", path.display()))?;
        Ok(())
    }

    pub fn clear(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("remove session {}", path.display()))?;
        }
        Ok(())
    }
}
