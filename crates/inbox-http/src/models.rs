//! Internal API response types.
//!
//! These types mirror the JSON served by the notification API and are not
//! exposed to consumers, who get core `NotificationRecord`s instead.

use inbox_core::NotificationRecord;
use serde::Deserialize;

/// One element of the `GET /notifications` response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNotification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
}

impl From<ApiNotification> for NotificationRecord {
    fn from(api: ApiNotification) -> Self {
        Self {
            id: api.id,
            title: api.title,
            message: api.message,
            timestamp: api.timestamp,
            is_read: api.is_read,
        }
    }
}
