//! Core services.
//!
//! Services orchestrate ports and hold client-side state. They depend only
//! on trait objects, so adapters are injected at the composition root.

mod notification_sync;

pub use notification_sync::{NotificationSync, SyncView};
