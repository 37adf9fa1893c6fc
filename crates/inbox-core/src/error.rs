//! Error taxonomy surfaced by `NotificationSync`.

use thiserror::Error;

use crate::ports::SourceError;

/// Errors returned to callers of the sync service.
///
/// All variants are recoverable. The service never retries; it reports the
/// failure once and leaves the cache as it was after the last successful
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// No session credential was available. No request was made.
    #[error("User not authenticated")]
    Unauthenticated,

    /// Refreshing the notification list failed.
    #[error("Failed to fetch notifications: {source}")]
    FetchFailed {
        /// Underlying source failure
        #[source]
        source: SourceError,
    },

    /// Marking a notification as read failed.
    #[error("Failed to mark notification {id} as read: {source}")]
    UpdateFailed {
        /// ID of the notification
        id: i64,
        /// Underlying source failure
        #[source]
        source: SourceError,
    },
}

impl SyncError {
    /// Whether the failure means the session is missing or was rejected.
    pub const fn is_auth_failure(&self) -> bool {
        match self {
            Self::Unauthenticated => true,
            Self::FetchFailed { source } | Self::UpdateFailed { source, .. } => {
                matches!(source, SourceError::Unauthorized { .. })
            }
        }
    }
}
