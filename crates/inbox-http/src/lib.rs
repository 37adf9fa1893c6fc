//! HTTP adapter for the inbox notification API.
//!
//! Implements `inbox_core::NotificationSourcePort` on top of reqwest:
//!
//! - `GET {base}/notifications` lists notifications
//! - `PUT {base}/notifications/{id}` marks one as read
//!
//! Both requests carry `Authorization: Bearer <credential>`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultInboxClient is meant to be
// used through the NotificationSourcePort trait, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultInboxClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, InboxClientConfig};

// Errors
pub use error::InboxHttpError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
