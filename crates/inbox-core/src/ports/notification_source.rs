//! Remote notification source port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Credential, NotificationRecord};

/// Errors from notification source operations.
///
/// Transport-specific errors (HTTP client, JSON decoder) are mapped to these
/// by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source rejected the credential.
    #[error("Credential rejected by notification source (status {status})")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        status: u16,
    },

    /// The notification does not exist on the source.
    #[error("Notification {id} not found")]
    NotFound {
        /// The notification ID
        id: i64,
    },

    /// The source answered with a non-success status.
    #[error("Notification source returned status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Response body could not be understood.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter is misconfigured (bad base URL and similar).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for notification source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Port trait for the remote notification authority.
///
/// Each method issues exactly one request. Implementations must not retry;
/// retry policy belongs to the caller.
#[async_trait]
pub trait NotificationSourcePort: Send + Sync {
    /// Fetch the full, ordered list of notifications for the session.
    async fn list(&self, credential: &Credential) -> SourceResult<Vec<NotificationRecord>>;

    /// Mark a notification as read. Idempotent on the source side.
    async fn mark_read(&self, credential: &Credential, id: i64) -> SourceResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn NotificationSourcePort>) {}

    #[test]
    fn test_error_display() {
        let err = SourceError::Status {
            status: 502,
            url: "https://api.example.com/notifications".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("/notifications"));

        let err = SourceError::NotFound { id: 42 };
        assert!(err.to_string().contains("42"));
    }
}
