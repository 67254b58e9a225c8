//! Account storage for the mock sign-in flow.
//!
//! Users live behind the [`UserStore`] trait so the auth layer never touches
//! a process-global list: production code injects the JSON-file store, tests
//! inject [`MemoryUserStore`].

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

use careermagic_core::ids::UserId;

mod auth;
mod json_store;
mod session;

pub use auth::AuthService;
pub use json_store::JsonUserStore;
pub use session::Session;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_DISPLAY_NAME: &str = "Demo User";

/// A stored account. Only the password digest ever reaches disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub password_sha256: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: OffsetDateTime,
}

/// The account shape handed to callers and persisted in sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password: &str, display_name: Option<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            password_sha256: password_digest(password),
            display_name,
            photo_url: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password_sha256 == password_digest(password)
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}

pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Injected account registry.
pub trait UserStore {
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
    fn insert(&mut self, user: UserRecord) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Vec<UserRecord>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_user() -> Self {
        let mut store = Self::new();
        store.users.push(UserRecord::new(
            DEMO_EMAIL,
            DEMO_PASSWORD,
            Some(DEMO_DISPLAY_NAME.to_string()),
        ));
        store
    }
}

impl UserStore for MemoryUserStore {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.iter().find(|user| user.email == email).cloned()
    }

    fn insert(&mut self, user: UserRecord) -> Result<()> {
        self.users.push(user);
        Ok(())
    }
}
