//! Sync lifecycle events.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag so a web or mobile listener can
//! switch on it:
//!
//! ```json
//! { "type": "refresh_completed", "count": 2, "unread": 1 }
//! ```

use serde::{Deserialize, Serialize};

/// Events emitted by `NotificationSync`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncEvent {
    /// A refresh request is about to be issued.
    RefreshStarted,

    /// The cache was replaced with a freshly fetched list.
    RefreshCompleted {
        /// Number of records now cached.
        count: usize,
        /// How many of them are unread.
        unread: usize,
    },

    /// A refresh failed; the cache is unchanged.
    RefreshFailed {
        /// Human-readable failure description.
        message: String,
    },

    /// The source confirmed a notification as read.
    Acknowledged {
        /// ID of the acknowledged notification.
        id: i64,
    },

    /// Marking a notification as read failed; the cache is unchanged.
    AcknowledgeFailed {
        /// ID of the notification.
        id: i64,
        /// Human-readable failure description.
        message: String,
    },
}

impl SyncEvent {
    /// User-facing notice text for this event.
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::RefreshStarted => "Loading notifications...",
            Self::RefreshCompleted { .. } => "Notifications updated",
            Self::RefreshFailed { .. } => {
                "Failed to fetch notifications. Please try again later."
            }
            Self::Acknowledged { .. } => "Notification marked as read",
            Self::AcknowledgeFailed { .. } => "Failed to mark notification as read",
        }
    }
}
