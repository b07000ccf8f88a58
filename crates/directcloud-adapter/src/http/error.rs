/*
[INPUT]:  Error sources (HTTP, backend envelopes, serialization, token acquisition)
[OUTPUT]: Structured error types carrying backend messages and status codes
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the DirectCloud adapter
#[derive(Error, Debug)]
pub enum DirectCloudError {
    /// Token acquisition failed
    #[error("Authentication failed ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Auth {
        status: StatusCode,
        message: Option<String>,
    },

    /// Backend rejected an operation
    #[error("Bad request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    BadRequest {
        status: StatusCode,
        message: Option<String>,
    },

    /// Error status that is not remapped to `BadRequest`
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Success envelope without the expected payload
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DirectCloudError {
    /// Build an `Auth` error from a token endpoint response body
    pub fn auth(status: StatusCode, body: &[u8]) -> Self {
        DirectCloudError::Auth {
            status,
            message: backend_message(body),
        }
    }

    /// Build a `BadRequest` error from an operation response body
    pub fn bad_request(status: StatusCode, body: &[u8]) -> Self {
        DirectCloudError::BadRequest {
            status,
            message: backend_message(body),
        }
    }

    /// Check if error indicates a failed token acquisition
    pub fn is_auth_error(&self) -> bool {
        matches!(self, DirectCloudError::Auth { .. })
    }

    /// Check if the backend rejected the operation
    pub fn is_bad_request(&self) -> bool {
        matches!(self, DirectCloudError::BadRequest { .. })
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DirectCloudError::Auth { status, .. }
            | DirectCloudError::BadRequest { status, .. }
            | DirectCloudError::UnexpectedStatus { status, .. } => Some(*status),
            DirectCloudError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Backend-supplied message for `Auth` and `BadRequest` errors
    pub fn message(&self) -> Option<&str> {
        match self {
            DirectCloudError::Auth { message, .. } | DirectCloudError::BadRequest { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }
}

/// Extract the human-readable text from an error body.
///
/// `all` wins over `message`. A non-string `all` is rendered as compact JSON.
pub(crate) fn backend_message(body: &[u8]) -> Option<String> {
    let Ok(Value::Object(object)) = serde_json::from_slice::<Value>(body) else {
        return None;
    };

    match object.get("all") {
        Some(Value::String(all)) => return Some(all.clone()),
        Some(Value::Null) | None => {}
        Some(other) => return Some(other.to_string()),
    }

    object
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Result type alias for DirectCloud operations
pub type Result<T> = std::result::Result<T, DirectCloudError>;
