//! # localStorage token store for browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web
//! platform**. It keeps the access and refresh tokens in the origin-scoped
//! `window.localStorage`, so a reload restores the session.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). An unavailable storage (private mode, disabled
//! cookies) degrades to "signed out" rather than crashing.

use crate::config::SessionConfig;
use crate::session::TokenStore;

/// `localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStore {
    keys: SessionConfig,
}

impl LocalStorageTokenStore {
    pub fn new(keys: SessionConfig) -> Self {
        Self { keys }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn keys(&self) -> &SessionConfig {
        &self.keys
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
