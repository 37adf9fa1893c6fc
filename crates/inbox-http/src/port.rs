//! Port trait implementation for `InboxClient`.
//!
//! Implements the core-owned `NotificationSourcePort` and maps internal
//! HTTP errors to `SourceError` at the boundary.

use async_trait::async_trait;
use inbox_core::{Credential, NotificationRecord, NotificationSourcePort, SourceError, SourceResult};

use crate::client::InboxClient;
use crate::error::InboxHttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert an internal error to a port error.
///
/// `id` is the notification the request targeted, if any; it turns a 404
/// into `NotFound`.
fn map_error(err: InboxHttpError, id: Option<i64>) -> SourceError {
    match err {
        InboxHttpError::ApiRequestFailed { status, url } => match (status, id) {
            (401 | 403, _) => SourceError::Unauthorized { status },
            (404, Some(id)) => SourceError::NotFound { id },
            _ => SourceError::Status { status, url },
        },
        InboxHttpError::Network(e) => SourceError::Network {
            message: e.to_string(),
        },
        InboxHttpError::JsonParse(e) => SourceError::InvalidResponse {
            message: e.to_string(),
        },
        InboxHttpError::InvalidUrl(e) => SourceError::Configuration {
            message: e.to_string(),
        },
        InboxHttpError::InvalidBaseUrl { url } => SourceError::Configuration {
            message: format!("unusable base URL {url}"),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> NotificationSourcePort for InboxClient<B> {
    async fn list(&self, credential: &Credential) -> SourceResult<Vec<NotificationRecord>> {
        self.fetch_notifications(credential)
            .await
            .map_err(|e| map_error(e, None))
    }

    async fn mark_read(&self, credential: &Credential, id: i64) -> SourceResult<()> {
        self.mark_notification_read(credential, id)
            .await
            .map_err(|e| map_error(e, Some(id)))
    }
}
