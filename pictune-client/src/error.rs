//! API error taxonomy
//!
//! Every failure of a backend call collapses into one of four kinds. The
//! store converts these into rejected actions; they never propagate as
//! panics.

use thiserror::Error;

/// Backend call errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request could not complete (DNS, connection, offline)
    #[error("Network error: {0}")]
    Transport(String),

    /// Request exceeded the configured deadline
    #[error("Request timed out")]
    Timeout,

    /// HTTP non-2xx with an optional server-provided message
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Response parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing message: the server's own message verbatim when it sent
    /// one, otherwise the caller's generic fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True for errors worth retrying by re-dispatching the same intent
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Timeout)
    }
}
