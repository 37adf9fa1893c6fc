//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - HTTP notification client (via inbox-http)
//! - Session credential provider (stored file or `--token` override)
//! - The `NotificationSync` service (via inbox-core)

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use inbox_core::{
    Credential, NotificationSync, SessionCredentialProvider, StaticCredentialProvider,
};
use inbox_http::{DefaultInboxClient, InboxClientConfig};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::NoticePrinter;
use crate::session::FileSessionStore;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root URL of the notification API.
    pub base_url: String,
    /// Token that takes precedence over the stored session.
    pub token_override: Option<String>,
    /// Location of the stored session.
    pub session_file: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Build the configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let session_file = match &cli.session_file {
            Some(path) => path.clone(),
            None => FileSessionStore::default_path()?,
        };

        Ok(Self {
            base_url: cli.base_url.clone(),
            token_override: cli.token.clone(),
            session_file,
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

/// Where the active credential comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// `--token` or `INBOX_TOKEN`.
    Override,
    /// The stored session file.
    Stored,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The notification sync service.
    pub sync: Arc<NotificationSync>,
    /// Persistent session storage, used by login/logout.
    pub sessions: Arc<FileSessionStore>,
    /// Which provider the sync service was given.
    pub session_source: SessionSource,
    /// API root in use.
    pub base_url: String,
}

impl CliContext {
    /// Access the sync service.
    pub fn sync(&self) -> &NotificationSync {
        &self.sync
    }

    /// Access the session store.
    pub fn sessions(&self) -> &FileSessionStore {
        &self.sessions
    }
}

/// Bootstrap the CLI application.
///
/// Builds the HTTP client, picks the credential provider and assembles the
/// sync service. No network traffic happens here.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let client_config = InboxClientConfig::new()
        .with_base_url(config.base_url.clone())
        .with_timeout(config.timeout);
    let client = DefaultInboxClient::new(&client_config)?;

    let sessions = Arc::new(FileSessionStore::new(config.session_file));

    let (provider, session_source) = match config.token_override.as_deref().and_then(Credential::new)
    {
        Some(credential) => {
            let provider: Arc<dyn SessionCredentialProvider> =
                Arc::new(StaticCredentialProvider::new(credential));
            (provider, SessionSource::Override)
        }
        None => {
            let provider: Arc<dyn SessionCredentialProvider> = sessions.clone();
            (provider, SessionSource::Stored)
        }
    };

    tracing::debug!(base_url = %config.base_url, ?session_source, "CLI bootstrapped");

    let sync = NotificationSync::new(Arc::new(client), provider)
        .with_emitter(Arc::new(NoticePrinter));

    Ok(CliContext {
        sync: Arc::new(sync),
        sessions,
        session_source,
        base_url: config.base_url,
    })
}

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`. Logs go to stderr so they never mix with listings.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
