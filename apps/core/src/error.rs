use reqwest::StatusCode;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request never produced a response (DNS, connection refused, reset...).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status {
        status: StatusCode,
        /// Message extracted from the error body, or the raw body if it had none.
        message: String,
    },

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Represents data validation errors (e.g., malformed JSON payloads).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an invalid base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the failure happened before any response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Timeout(_))
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Network(s) => AppError::Network(s.clone()),
            AppError::Status { status, message } => AppError::Status {
                status: *status,
                message: message.clone(),
            },
            AppError::Timeout(s) => AppError::Timeout(s.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else if err.is_decode() {
            AppError::Validation(format!("Invalid response body: {}", err))
        } else if let Some(status) = err.status() {
            AppError::Status {
                status,
                message: err.to_string(),
            }
        } else if err.is_connect() || err.is_request() {
            AppError::Network(format!("HTTP error: {}", err))
        } else {
            AppError::Internal(format!("HTTP error: {}", err))
        }
    }
}
