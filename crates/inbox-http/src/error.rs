//! Internal error types for notification API calls.
//!
//! These errors are mapped to `SourceError` at the port boundary. They are
//! public only because client construction can fail with them.

use thiserror::Error;

/// Result type alias for notification API operations.
pub type HttpResult<T> = Result<T, InboxHttpError>;

/// Errors related to notification API operations.
#[derive(Debug, Error)]
pub enum InboxHttpError {
    /// API request failed with an HTTP error status.
    #[error("Notification API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The configured base URL cannot carry a path.
    #[error("Base URL cannot be used for API requests: {url}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
