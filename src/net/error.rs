//! Failure taxonomy for gateway calls.
//!
//! ERROR HANDLING
//! ==============
//! Every request resolves to `Result<T, ApiError>`. Pages convert errors to
//! transient notices; nothing here panics or aborts rendering.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Error body shape the server uses for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ServerMessage {
    pub message: Option<String>,
}

/// A failed gateway call: either the transport broke or the server answered
/// with a non-2xx status (optionally carrying a human-readable message).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    Transport(String),
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Build a status error from a response body that may carry `{ message }`.
    pub fn from_status(status: u16, body: Option<ServerMessage>) -> Self {
        Self::Status {
            status,
            message: body.and_then(|b| b.message).filter(|m| !m.trim().is_empty()),
        }
    }

    /// The server-supplied message if there is one, otherwise `fallback`.
    ///
    /// Transport failures always use the fallback: raw socket errors are not
    /// useful to visitors.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(detail) => write!(f, "request failed: {detail}"),
            Self::Status { status, message: Some(message) } => {
                write!(f, "server error {status}: {message}")
            }
            Self::Status { status, message: None } => write!(f, "server error {status}"),
        }
    }
}

impl std::error::Error for ApiError {}
