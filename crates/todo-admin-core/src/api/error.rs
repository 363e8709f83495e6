//! API error taxonomy

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    Status { status: u16, message: String },

    /// Server rejected the credential; the session has been cleared
    #[error("Not authorized, please log in again")]
    Unauthorized,

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        ApiError::Status {
            status: 404,
            message: format!("{} not found", what),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
