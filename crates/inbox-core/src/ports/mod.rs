//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or other transport types in any signature
//! - One remote request per port method, no retries
//! - Credentials are passed explicitly, never looked up from globals

pub mod event_emitter;
pub mod notification_source;
pub mod session;

pub use event_emitter::{ChannelSyncEmitter, NoopSyncEmitter, SyncEventEmitter};
pub use notification_source::{NotificationSourcePort, SourceError, SourceResult};
pub use session::{SessionCredentialProvider, StaticCredentialProvider};
