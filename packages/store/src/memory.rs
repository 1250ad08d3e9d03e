use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::SessionConfig;
use crate::session::TokenStore;

/// In-memory TokenStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    keys: SessionConfig,
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: SessionConfig) -> Self {
        Self {
            keys,
            items: Arc::default(),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn keys(&self) -> &SessionConfig {
        &self.keys
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_save_and_load() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save(&Session::new("access", "refresh"));

        let session = store.load().unwrap();
        assert_eq!(session.access_token, "access");
        assert_eq!(session.refresh_token, "refresh");
        assert_eq!(store.get_item("token").as_deref(), Some("access"));
        assert_eq!(store.get_item("refresh_token").as_deref(), Some("refresh"));
    }

    #[test]
    fn test_clear_removes_both_tokens() {
        let store = MemoryTokenStore::new();
        store.save(&Session::new("access", "refresh"));
        store.clear();

        assert!(store.load().is_none());
        assert!(store.get_item("refresh_token").is_none());
    }

    #[test]
    fn test_missing_refresh_token_still_loads() {
        let store = MemoryTokenStore::new();
        store.set_item("token", "access");

        let session = store.load().unwrap();
        assert_eq!(session.refresh_token, "");
    }

    #[test]
    fn test_empty_access_token_is_signed_out() {
        let store = MemoryTokenStore::new();
        store.set_item("token", "");
        assert!(store.load().is_none());
    }

    #[test]
    fn test_custom_keys() {
        let store = MemoryTokenStore::with_keys(SessionConfig {
            access_token_key: "tb.access".into(),
            refresh_token_key: "tb.refresh".into(),
        });
        store.save(&Session::new("a", "r"));
        assert!(store.get_item("token").is_none());
        assert_eq!(store.get_item("tb.access").as_deref(), Some("a"));
    }

    #[test]
    fn test_clones_share_storage() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.save(&Session::new("a", "r"));
        assert!(other.load().is_some());
    }
}
