//! Transient notices for sync events.

use inbox_core::{SyncEvent, SyncEventEmitter};

/// Prints a one-line notice to stderr per acknowledgment attempt.
///
/// Refresh events are silent: the listing is the feedback on success, and a
/// failed refresh surfaces as the command's error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoticePrinter;

impl NoticePrinter {
    /// Text to print for `event`, if any.
    pub fn line_for(event: &SyncEvent) -> Option<String> {
        match event {
            SyncEvent::RefreshStarted
            | SyncEvent::RefreshCompleted { .. }
            | SyncEvent::RefreshFailed { .. } => None,
            SyncEvent::Acknowledged { id } | SyncEvent::AcknowledgeFailed { id, .. } => {
                Some(format!("[{id}] {}", event.notice()))
            }
        }
    }
}

impl SyncEventEmitter for NoticePrinter {
    fn emit(&self, event: SyncEvent) {
        if let Some(line) = Self::line_for(&event) {
            eprintln!("{line}");
        }
    }
}
