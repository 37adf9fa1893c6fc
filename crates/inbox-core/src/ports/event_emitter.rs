//! Event emitter trait for sync lifecycle notices.
//!
//! A presentation layer subscribes to these to show transient notices
//! ("Notification marked as read", "Failed to fetch notifications") without
//! the sync service knowing how they are rendered.

use tokio::sync::mpsc;

use crate::events::SyncEvent;

/// Trait for emitting sync events.
///
/// Implementations must not block.
pub trait SyncEventEmitter: Send + Sync {
    /// Emit a sync event.
    fn emit(&self, event: SyncEvent);
}

/// A no-op event emitter for tests and contexts without a listener.
#[derive(Debug, Clone, Default)]
pub struct NoopSyncEmitter;

impl NoopSyncEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl SyncEventEmitter for NoopSyncEmitter {
    fn emit(&self, _event: SyncEvent) {
        // Intentionally do nothing
    }
}

/// Emitter that forwards events into an unbounded tokio channel.
///
/// Events emitted after the receiver has been dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelSyncEmitter {
    tx: mpsc::UnboundedSender<SyncEvent>,
}

impl ChannelSyncEmitter {
    /// Create an emitter and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SyncEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SyncEventEmitter for ChannelSyncEmitter {
    fn emit(&self, event: SyncEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("sync event dropped, no receiver");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopSyncEmitter::new();

        // Should not panic
        emitter.emit(SyncEvent::RefreshStarted);
    }

    #[test]
    fn test_arc_emitter() {
        let emitter: Arc<dyn SyncEventEmitter> = Arc::new(NoopSyncEmitter::new());
        emitter.emit(SyncEvent::Acknowledged { id: 1 });
    }

    #[test]
    fn test_channel_emitter_forwards_events() {
        let (emitter, mut rx) = ChannelSyncEmitter::channel();
        emitter.emit(SyncEvent::Acknowledged { id: 3 });

        assert_eq!(rx.try_recv().unwrap(), SyncEvent::Acknowledged { id: 3 });
    }

    #[test]
    fn test_channel_emitter_survives_dropped_receiver() {
        let (emitter, rx) = ChannelSyncEmitter::channel();
        drop(rx);
        emitter.emit(SyncEvent::RefreshStarted);
    }
}
