//! Notification API client.

use inbox_core::{Credential, NotificationRecord};
use url::Url;

use crate::config::InboxClientConfig;
use crate::error::{HttpResult, InboxHttpError};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiNotification;
use crate::url::{build_list_url, build_mark_read_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default notification client using the reqwest HTTP backend.
pub type DefaultInboxClient = InboxClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the notification API.
///
/// This client is generic over an HTTP backend so tests can swap in a fake.
/// Use `DefaultInboxClient` for production code and talk to it through the
/// `NotificationSourcePort` trait.
pub struct InboxClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultInboxClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &InboxClientConfig) -> HttpResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> InboxClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    /// The API root requests are built from.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /notifications`
    pub(crate) async fn fetch_notifications(
        &self,
        credential: &Credential,
    ) -> HttpResult<Vec<NotificationRecord>> {
        let url = build_list_url(&self.base_url);
        let body: Vec<ApiNotification> = self.backend.get_json(&url, credential).await?;
        tracing::debug!(count = body.len(), "Fetched notifications");
        Ok(body.into_iter().map(Into::into).collect())
    }

    /// `PUT /notifications/{id}`
    pub(crate) async fn mark_notification_read(
        &self,
        credential: &Credential,
        id: i64,
    ) -> HttpResult<()> {
        let url = build_mark_read_url(&self.base_url, id);
        self.backend.put_empty(&url, credential).await
    }
}

/// Parse and validate the configured API root.
fn parse_base_url(raw: &str) -> HttpResult<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(InboxHttpError::InvalidBaseUrl {
            url: raw.to_string(),
        });
    }
    Ok(url)
}
