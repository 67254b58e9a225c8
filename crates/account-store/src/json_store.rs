use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{UserRecord, UserStore, DEMO_DISPLAY_NAME, DEMO_EMAIL, DEMO_PASSWORD};

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserDb {
    users: Vec<UserRecord>,
}

/// File-backed account registry. The whole registry loads at open and every
/// insert rewrites the file; account counts here are tiny.
#[derive(Debug)]
pub struct JsonUserStore {
    path: PathBuf,
    db: UserDb,
}

impl JsonUserStore {
    pub fn open(path: &Path) -> Result<Self> {
        let db = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read user db {}", path.display()))?;
            serde_json::from_str(&contents).context("parse user db JSON")?
        } else {
            UserDb::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            db,
        })
    }

    /// Open the registry and make sure the demo account exists.
    pub fn open_with_demo_user(path: &Path) -> Result<Self> {
        let mut store = Self::open(path)?;
        if store.find_by_email(DEMO_EMAIL).is_none() {
            store.insert(UserRecord::new(
                DEMO_EMAIL,
                DEMO_PASSWORD,
                Some(DEMO_DISPLAY_NAME.to_string()),
            ))?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.db.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.users.is_empty()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create user db dir {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&self.db).context("render user db JSON")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("write user db {}", self.path.display()))?;
        Ok(())
    }
}

impl UserStore for JsonUserStore {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.db.users.iter().find(|user| user.email == email).cloned()
    }

    fn insert(&mut self, user: UserRecord) -> Result<()> {
        self.db.users.push(user);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_on_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonUserStore::open(&dir.path().join("users.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn inserted_users_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let mut store = JsonUserStore::open(&path).unwrap();
        store
            .insert(UserRecord::new("someone@example.com", "secret", None))
            .unwrap();

        let reopened = JsonUserStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        let user = reopened.find_by_email("someone@example.com").unwrap();
        assert!(user.verify_password("secret"));
    }

    #[test]
    fn demo_user_is_seeded_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let store = JsonUserStore::open_with_demo_user(&path).unwrap();
        assert_eq!(store.len(), 1);

        let store = JsonUserStore::open_with_demo_user(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.find_by_email(DEMO_EMAIL).is_some());
    }
}
