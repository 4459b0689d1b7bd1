//! Uniform error value produced by every network call and local argument check.
//! Views only ever render [`ApiError`]'s message; the remaining fields are kept
//! for diagnostics and for branching on specific statuses (e.g. 404).

use serde_json::Value;
use thiserror::Error;

/// Maximum number of message characters surfaced to the UI.
const MAX_MESSAGE_CHARS: usize = 200;
/// Message used when neither the body nor the underlying failure says anything.
pub const FALLBACK_MESSAGE: &str = "Unexpected error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was missing; no request was sent.
    InvalidArgument,
    Network,
    Timeout,
    Http,
    Decode,
    Config,
}

/// Normalized failure: status when the server answered, a best-effort
/// human-readable message, the raw response body, and the underlying cause.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
    pub data: Option<Value>,
    pub original: Option<String>,
}

impl ApiError {
    fn new(
        kind: ErrorKind,
        status: Option<u16>,
        data: Option<Value>,
        original: Option<String>,
    ) -> Self {
        let message = normalize_message(data.as_ref(), original.as_deref());
        Self {
            kind,
            status,
            message,
            data,
            original,
        }
    }

    /// Local fail-fast error for a missing or blank argument.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, None, None, Some(message.into()))
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, None, None, Some(message.into()))
    }

    /// The request never produced a response.
    pub fn network(original: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, None, None, Some(original.into()))
    }

    pub fn timeout(timeout_ms: u32) -> Self {
        Self::new(
            ErrorKind::Timeout,
            None,
            None,
            Some(format!("timeout of {timeout_ms}ms exceeded")),
        )
    }

    /// Non-2xx response. `data` is the decoded body, if any.
    pub fn http(status: u16, data: Option<Value>) -> Self {
        Self::new(
            ErrorKind::Http,
            Some(status),
            data,
            Some(format!("Request failed with status code {status}")),
        )
    }

    pub fn decode(original: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, None, None, Some(original.into()))
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

/// Picks the message shown to users, in order: a non-empty string body, the
/// body's `message` field, the underlying failure text, then a fixed fallback.
pub fn normalize_message(data: Option<&Value>, underlying: Option<&str>) -> String {
    let from_body = match data {
        Some(Value::String(text)) => non_empty(text),
        Some(Value::Object(map)) => map.get("message").and_then(Value::as_str).and_then(non_empty),
        _ => None,
    };

    from_body
        .or_else(|| underlying.and_then(non_empty))
        .map(|message| message.chars().take(MAX_MESSAGE_CHARS).collect())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_body_wins_over_everything() {
        let error = ApiError::http(500, Some(json!("  Database unavailable ")));
        assert_eq!(error.message, "Database unavailable");
        assert_eq!(error.status, Some(500));
        assert_eq!(error.kind, ErrorKind::Http);
    }

    #[test]
    fn body_message_field_is_used_for_objects() {
        let body = json!({ "success": false, "message": "Email already taken" });
        let error = ApiError::http(409, Some(body.clone()));
        assert_eq!(error.message, "Email already taken");
        assert_eq!(error.data, Some(body));
    }

    #[test]
    fn falls_back_to_underlying_failure_text() {
        let error = ApiError::http(502, Some(json!({ "error": "bad gateway" })));
        assert_eq!(error.message, "Request failed with status code 502");

        let error = ApiError::network("Failed to fetch");
        assert_eq!(error.message, "Failed to fetch");
        assert_eq!(error.status, None);
    }

    #[test]
    fn blank_inputs_use_fixed_fallback() {
        assert_eq!(normalize_message(Some(&json!("   ")), None), FALLBACK_MESSAGE);
        assert_eq!(normalize_message(Some(&json!({ "message": "" })), Some("")), FALLBACK_MESSAGE);
        assert_eq!(normalize_message(None, None), FALLBACK_MESSAGE);
    }

    #[test]
    fn long_messages_are_truncated() {
        let long = "x".repeat(500);
        let error = ApiError::http(400, Some(Value::String(long)));
        assert_eq!(error.message.chars().count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn display_prints_message_only() {
        let error = ApiError::invalid_argument("userId is required");
        assert_eq!(error.to_string(), "userId is required");
        assert_eq!(error.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn not_found_is_detected_by_status() {
        assert!(ApiError::http(404, None).is_not_found());
        assert!(!ApiError::http(500, None).is_not_found());
        assert!(!ApiError::timeout(15_000).is_not_found());
    }
}
