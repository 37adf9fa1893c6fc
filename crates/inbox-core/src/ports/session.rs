//! Session credential provider port.
//!
//! The sync service never manages credential lifecycle. It asks the provider
//! for a credential right before each remote call and treats absence as an
//! unauthenticated session.

use async_trait::async_trait;

use crate::domain::Credential;

/// Read-only source of the current session credential.
///
/// Implementations may read from disk, environment, a keychain, or hold a
/// fixed value. Lookup failures should be reported as `None`.
#[async_trait]
pub trait SessionCredentialProvider: Send + Sync {
    /// Return the current credential, if a session exists.
    async fn credential(&self) -> Option<Credential>;
}

/// Provider holding a fixed credential (or none).
///
/// Useful for tests and for contexts where the token is supplied up front,
/// such as a command-line flag.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    credential: Option<Credential>,
}

impl StaticCredentialProvider {
    /// Provider that always returns `credential`.
    pub const fn new(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// Provider with no session.
    pub const fn anonymous() -> Self {
        Self { credential: None }
    }
}

#[async_trait]
impl SessionCredentialProvider for StaticCredentialProvider {
    async fn credential(&self) -> Option<Credential> {
        self.credential.clone()
    }
}
