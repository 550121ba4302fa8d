//! Error types for the API client.

use serde_json::Value;

/// The single error shape every failed request collapses into.
///
/// `status` is the HTTP status code of the response, or `0` for failures
/// below the HTTP layer (DNS, connection refused, timeout). `payload`
/// keeps the parsed JSON error body, when there was one, for callers
/// that need more than the message.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub payload: Option<Value>,
}

impl ApiError {
    /// Builds the error for a non-2xx response.
    ///
    /// The message comes from the body's `message` field, then its `error`
    /// field, then a generic status-based fallback. A body that is not
    /// JSON keeps the fallback message and no payload.
    pub fn from_response(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<Value>(body).ok();
        let message = payload
            .as_ref()
            .and_then(|v| {
                v.get("message")
                    .and_then(Value::as_str)
                    .or_else(|| v.get("error").and_then(Value::as_str))
            })
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self {
            status,
            message,
            payload,
        }
    }

    /// Builds the error for a transport-level failure.
    pub fn transport(err: &reqwest::Error) -> Self {
        Self {
            status: 0,
            message: err.to_string(),
            payload: None,
        }
    }

    /// True when the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
