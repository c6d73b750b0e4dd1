//! Client error types

use thiserror::Error;

use super::Endpoint;

/// Errors returned by task API clients
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Server answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Decode(String),

    /// Client could not be constructed
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl ApiError {
    /// Non-success status for `endpoint`, carrying its fixed failure message
    pub fn status(endpoint: Endpoint, status: u16) -> Self {
        ApiError::Status {
            status,
            message: endpoint.failure_message().to_string(),
        }
    }
}

#[cfg(feature = "cli")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
