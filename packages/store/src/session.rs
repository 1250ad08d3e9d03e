//! # Session tokens and their persistence
//!
//! A [`Session`] is the pair of tokens handed out by `POST /login`. It is
//! created on login, restored from a [`TokenStore`] when the app loads, and
//! destroyed on logout. Nothing else about the user is persisted.
//!
//! [`TokenStore`] is the persistence seam. Implementations live in sibling
//! modules: [`crate::memory`] (native builds and tests) and `crate::local`
//! (browser `localStorage`, behind the `web` feature on wasm32).

use crate::config::SessionConfig;

/// Access and refresh tokens for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Durable key-value storage for the session tokens.
pub trait TokenStore {
    /// Storage keys used by this store.
    fn keys(&self) -> &SessionConfig;

    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);

    /// Restore a session. A missing access token means signed out; a missing
    /// refresh token is tolerated.
    fn load(&self) -> Option<Session> {
        let access_token = self
            .get_item(&self.keys().access_token_key)
            .filter(|t| !t.is_empty())?;
        let refresh_token = self
            .get_item(&self.keys().refresh_token_key)
            .unwrap_or_default();
        Some(Session {
            access_token,
            refresh_token,
        })
    }

    fn save(&self, session: &Session) {
        self.set_item(&self.keys().access_token_key, &session.access_token);
        self.set_item(&self.keys().refresh_token_key, &session.refresh_token);
    }

    fn clear(&self) {
        self.remove_item(&self.keys().access_token_key);
        self.remove_item(&self.keys().refresh_token_key);
    }
}
