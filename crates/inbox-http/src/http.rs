//! HTTP backend abstraction for the notification API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Requests are never retried here.

use crate::config::InboxClientConfig;
use crate::error::{HttpResult, InboxHttpError};
use async_trait::async_trait;
use inbox_core::Credential;
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that talk to the notification API.
///
/// This is an implementation detail - external code should use the
/// `NotificationSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Authenticated GET, deserializing the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        credential: &Credential,
    ) -> HttpResult<T>;

    /// Authenticated PUT with an empty JSON object body. The response body
    /// is ignored.
    async fn put_empty(&self, url: &Url, credential: &Credential) -> HttpResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &InboxClientConfig) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    fn get_request(&self, url: &Url, credential: &Credential) -> RequestBuilder {
        self.client
            .get(url.as_str())
            .header(AUTHORIZATION, credential.bearer_header())
    }

    fn put_request(&self, url: &Url, credential: &Credential) -> RequestBuilder {
        self.client
            .put(url.as_str())
            .header(AUTHORIZATION, credential.bearer_header())
            .json(&mark_read_body())
    }

    /// Send a request and turn any non-2xx status into an error.
    async fn send(&self, request: RequestBuilder, url: &Url) -> HttpResult<reqwest::Response> {
        let response = request.send().await?;
        check_status(response.status(), url)?;
        Ok(response)
    }
}

/// Body of the mark-as-read PUT: an empty JSON object.
pub(crate) fn mark_read_body() -> serde_json::Value {
    serde_json::json!({})
}

fn check_status(status: StatusCode, url: &Url) -> HttpResult<()> {
    if status.is_success() {
        return Ok(());
    }

    tracing::warn!(status = status.as_u16(), %url, "Notification API returned error status");
    Err(InboxHttpError::ApiRequestFailed {
        status: status.as_u16(),
        url: url.to_string(),
    })
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        credential: &Credential,
    ) -> HttpResult<T> {
        tracing::debug!(%url, "GET");
        let response = self.send(self.get_request(url, credential), url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn put_empty(&self, url: &Url, credential: &Credential) -> HttpResult<()> {
        tracing::debug!(%url, "PUT");
        self.send(self.put_request(url, credential), url).await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
