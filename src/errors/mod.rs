//! Error handling module for the Lernify client.
//!
//! Provides a centralized error type covering transport, contract, and
//! client-side validation failures.

use std::fmt;

/// Application error type.
#[derive(Debug)]
pub enum ClientError {
    /// Backend responded with a non-success status; carries the raw body text
    Api { status: u16, body: String },
    /// Transport-level failure (connection refused, DNS, etc.)
    Http(String),
    /// Response body could not be decoded
    Json(String),
    /// Session or export file IO failure
    Io(String),
    /// Client-side form validation failure
    Validation(String),
    /// Action requires a logged-in user
    NotAuthenticated,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Api { status, body } => write!(f, "API error ({}): {}", status, body),
            ClientError::Http(msg) => write!(f, "HTTP error: {}", msg),
            ClientError::Json(msg) => write!(f, "JSON error: {}", msg),
            ClientError::Io(msg) => write!(f, "IO error: {}", msg),
            ClientError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ClientError::NotAuthenticated => write!(f, "Please login first"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        ClientError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("IO error: {:?}", err);
        ClientError::Io(err.to_string())
    }
}
