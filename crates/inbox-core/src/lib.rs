//! Core domain types, port definitions and the notification sync service.
//!
//! This crate has no transport dependencies. The HTTP adapter lives in
//! `inbox-http` and is wired in by the binary's composition root.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod events;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Credential, NotificationRecord, mark_read, unread_count};
pub use error::SyncError;
pub use events::SyncEvent;
pub use ports::{
    ChannelSyncEmitter, NoopSyncEmitter, NotificationSourcePort, SessionCredentialProvider,
    SourceError, SourceResult, StaticCredentialProvider, SyncEventEmitter,
};
pub use services::{NotificationSync, SyncView};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
