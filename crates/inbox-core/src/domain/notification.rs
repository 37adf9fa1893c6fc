//! Notification domain types.
//!
//! Records are created and owned by the remote notification source. The
//! client only ever holds a cache of them and flips `is_read` after the
//! source has confirmed an acknowledgment.

use serde::{Deserialize, Serialize};

/// A single notification as served by the remote source.
///
/// Field names follow the remote JSON shape (`isRead` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    /// Stable identifier, unique within a fetched collection.
    pub id: i64,
    /// Short display string.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Creation time in whatever format the source uses. Never reparsed.
    pub timestamp: String,
    /// Acknowledgment flag.
    pub is_read: bool,
}

impl NotificationRecord {
    /// Copy of this record with the read flag set.
    #[must_use]
    pub fn acknowledged(&self) -> Self {
        Self {
            is_read: true,
            ..self.clone()
        }
    }
}

/// Produce a new collection where the record matching `id` is marked read.
///
/// Every other record is carried over unchanged and order is preserved. An
/// unknown `id` yields an identical copy. The flag is only ever set, never
/// cleared.
#[must_use]
pub fn mark_read(records: &[NotificationRecord], id: i64) -> Vec<NotificationRecord> {
    records
        .iter()
        .map(|record| {
            if record.id == id {
                record.acknowledged()
            } else {
                record.clone()
            }
        })
        .collect()
}

/// Count the records that have not been acknowledged yet.
#[must_use]
pub fn unread_count(records: &[NotificationRecord]) -> usize {
    records.iter().filter(|r| !r.is_read).count()
}
