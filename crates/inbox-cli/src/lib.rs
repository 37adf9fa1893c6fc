//! Command-line adapter for the inbox notification client.
//!
//! `main.rs` parses arguments, calls [`bootstrap`] and dispatches to the
//! handlers in [`handlers`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary entry point
use anyhow as _;
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod session;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, SessionSource, bootstrap, init_tracing};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use session::FileSessionStore;
