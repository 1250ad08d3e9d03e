//! # Client configuration: `taskboard.toml`
//!
//! Defines the TOML file the web binary embeds at build time
//! (filename: [`ClientConfig::filename`] = `"taskboard.toml"`). It tells the
//! client where the remote API lives and under which keys the session tokens
//! are persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [session]
//! access_token_key = "token"
//! refresh_token_key = "refresh_token"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers (`with_base_url`), TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Base URL of the remote API. Trailing slashes are ignored when building request URLs. |
//! | [`SessionConfig`] | Storage keys for the access and refresh tokens. |
//!
//! Every section has defaults, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `taskboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Keys under which the session tokens are persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_access_token_key")]
    pub access_token_key: String,
    #[serde(default = "default_refresh_token_key")]
    pub refresh_token_key: String,
}

fn default_access_token_key() -> String {
    "token".to_string()
}

fn default_refresh_token_key() -> String {
    "refresh_token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            access_token_key: default_access_token_key(),
            refresh_token_key: default_refresh_token_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
