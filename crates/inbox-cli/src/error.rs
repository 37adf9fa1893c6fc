//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `SyncError` to exit codes and user-facing messages.

use inbox_core::SyncError;
use inbox_http::InboxHttpError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No session, or the session was rejected.
    #[error("{0}")]
    Unauthenticated(String),

    /// The notification API failed.
    #[error("{0}")]
    Remote(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2,         // EX_USAGE
            Self::Remote(_) => 69,           // EX_UNAVAILABLE
            Self::Io(_) => 74,               // EX_IOERR
            Self::Unauthenticated(_) => 77,  // EX_NOPERM
            Self::Config(_) => 78,           // EX_CONFIG
        }
    }
}

impl From<SyncError> for CliError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Unauthenticated => Self::Unauthenticated(
                "User not authenticated. Run `inbox login <TOKEN>` or set INBOX_TOKEN.".to_string(),
            ),
            other if other.is_auth_failure() => {
                Self::Unauthenticated(format!("{other}. Your session may have expired."))
            }
            other => Self::Remote(other.to_string()),
        }
    }
}

impl From<InboxHttpError> for CliError {
    fn from(err: InboxHttpError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inbox_core::SourceError;

    #[test]
    fn test_unauthenticated_maps_to_noperm() {
        let err = CliError::from(SyncError::Unauthenticated);
        assert_eq!(err.exit_code(), 77);
        assert!(err.to_string().contains("inbox login"));
    }

    #[test]
    fn test_rejected_credential_maps_to_noperm() {
        let err = CliError::from(SyncError::FetchFailed {
            source: SourceError::Unauthorized { status: 401 },
        });
        assert_eq!(err.exit_code(), 77);
    }

    #[test]
    fn test_remote_failure_maps_to_unavailable() {
        let err = CliError::from(SyncError::UpdateFailed {
            id: 3,
            source: SourceError::Network {
                message: "timed out".to_string(),
            },
        });
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CliError::from(io);
        assert_eq!(err.exit_code(), 74);
    }
}
