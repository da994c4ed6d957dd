//! Error types for admin-user-export
//!
//! Every failure the export can hit is a variant of [`Error`]. Callers never see a
//! panic; the orchestration layer turns each variant into a printed diagnostic.

use thiserror::Error;

/// Result type alias for admin-user-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for admin-user-export
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "ADMIN_PASSWORD")
        key: Option<String>,
    },

    /// The admin endpoint rejected the bearer credential (HTTP 401)
    #[error("HTTP error occurred: 401 Unauthorized")]
    Unauthorized {
        /// Response body returned alongside the 401
        body: String,
    },

    /// Any other non-success HTTP status
    #[error("HTTP error occurred: {status}")]
    HttpStatus {
        /// Status returned by the server
        status: reqwest::StatusCode,
        /// Response body, kept verbatim for diagnostics
        body: String,
    },

    /// Network error (DNS, connection refused, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was valid JSON but not a list of user objects
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV encoding or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>, key: &str) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// Response body captured from a failed HTTP exchange, if any
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::Unauthorized { body } | Error::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Follow-up line telling the operator what to check
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Unauthorized { .. } => {
                Some("-> This is an 'Unauthorized' error. Is your ADMIN_PASSWORD correct?")
            }
            Error::Config { key: Some(key), .. } if key == "ADMIN_PASSWORD" => {
                Some("-> Set ADMIN_PASSWORD in the environment or a .env file.")
            }
            Error::Network(e) if e.is_timeout() => {
                Some("-> The request timed out. Check API_URL or raise REQUEST_TIMEOUT_SECS.")
            }
            Error::Network(e) if e.is_connect() => {
                Some("-> Could not connect. Is API_URL correct and the backend running?")
            }
            _ => None,
        }
    }

    /// Whether this failure came from writing the output file
    pub fn is_filesystem(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}
