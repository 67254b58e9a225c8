use std::path::PathBuf;

use anyhow::Result;

use careermagic_core::error::CareerMagicError;

use crate::session::Session;
use crate::{PublicUser, UserRecord, UserStore};

/// Mock sign-in flow over an injected [`UserStore`]. Credentials are checked
/// locally; the "session" is a JSON file next to the other stores.
pub struct AuthService<S: UserStore> {
    store: S,
    session_path: PathBuf,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S, session_path: PathBuf) -> Self {
        Self {
            store,
            session_path,
        }
    }

    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<PublicUser> {
        if self.store.find_by_email(email).is_some() {
            return Err(CareerMagicError::Auth("Email already in use".to_string()).into());
        }

        let user = UserRecord::new(email, password, Some(display_name.to_string()));
        let public = user.to_public();
        self.store.insert(user)?;
        Session::new(public.clone()).save(&self.session_path)?;
        Ok(public)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<PublicUser> {
        let user = self
            .store
            .find_by_email(email)
            .filter(|user| user.verify_password(password))
            .ok_or_else(|| CareerMagicError::Auth("Invalid credentials".to_string()))?;

        let public = user.to_public();
        Session::new(public.clone()).save(&self.session_path)?;
        Ok(public)
    }

    pub fn logout(&mut self) -> Result<()> {
        Session::clear(&self.session_path)
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        Session::load(&self.session_path)
    }
}
