//! Error types for remote calls and user actions.

use serde::Deserialize;

/// Failure of a single request to the remote API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error body returned by the server: `{"detail": ...}`.
///
/// Validation failures carry a structured detail; only plain strings are
/// meant for display.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    pub(crate) fn from_body(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| match b.detail {
                serde_json::Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            });
        ApiError::Status { status, detail }
    }

    /// Server-provided message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The single display string for this failure: the server detail
    /// verbatim, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// A failed user action, reduced to the banner text shown for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Reduce `err` to the server detail or `fallback`, logging the cause.
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        tracing::warn!(error = %err, "{fallback}");
        Self::new(err.user_message(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_used() {
        let err = ApiError::from_body(400, br#"{"detail":"Email already exists"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("Email already exists"));
        assert_eq!(err.user_message("Registration failed"), "Email already exists");
    }

    #[test]
    fn test_structured_detail_falls_back() {
        let err = ApiError::from_body(
            422,
            br#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#,
        );
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_body(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.user_message("Failed to fetch projects"), "Failed to fetch projects");
    }

    #[test]
    fn test_action_error_display_is_message() {
        let err = ActionError::from_api(
            ApiError::from_body(404, br#"{"detail":"User not found"}"#),
            "Failed to add member",
        );
        assert_eq!(err.to_string(), "User not found");
    }
}
