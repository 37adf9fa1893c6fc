//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use inbox_http::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for reading and acknowledging notifications.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "inbox")]
#[command(about = "Read and acknowledge your notifications")]
#[command(version)]
pub struct Cli {
    /// Root URL of the notification API
    #[arg(long = "base-url", env = "INBOX_API_URL", global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Access token to use instead of the stored session
    #[arg(long = "token", env = "INBOX_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Override the session file location
    #[arg(long = "session-file", global = true)]
    pub session_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout", global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
