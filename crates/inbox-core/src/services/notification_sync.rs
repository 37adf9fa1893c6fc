//! Notification sync service.
//!
//! Owns the local notification cache, refreshes it wholesale from the
//! remote source and applies acknowledgments only after the source has
//! confirmed them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, error, info, warn};

use crate::domain::{Credential, NotificationRecord, mark_read, unread_count};
use crate::error::SyncError;
use crate::events::SyncEvent;
use crate::ports::{
    NoopSyncEmitter, NotificationSourcePort, SessionCredentialProvider, SyncEventEmitter,
};

/// Snapshot of the cache as a presentation layer would render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncView {
    /// A refresh is outstanding.
    Loading,
    /// No notifications cached.
    Empty,
    /// Cached notifications in source order.
    Populated(Arc<Vec<NotificationRecord>>),
}

// ============================================================================
// Loading flag
// ============================================================================

/// RAII guard marking one refresh as outstanding.
///
/// Dropping the guard (normal return, early `?`, panic unwind, or the
/// refresh future being dropped) releases the mark.
struct LoadingGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> LoadingGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Service
// ============================================================================

/// Local view of a user's notifications, kept in sync with the source.
///
/// All operations take `&self`, so one instance can be shared behind an
/// `Arc` by several callers. The cache lock is never held across an await;
/// every mutation is a single swap of the cached snapshot.
pub struct NotificationSync {
    source: Arc<dyn NotificationSourcePort>,
    session: Arc<dyn SessionCredentialProvider>,
    emitter: Arc<dyn SyncEventEmitter>,
    records: RwLock<Arc<Vec<NotificationRecord>>>,
    in_flight: AtomicUsize,
}

impl NotificationSync {
    /// Create a sync service with an empty cache and no event listener.
    pub fn new(
        source: Arc<dyn NotificationSourcePort>,
        session: Arc<dyn SessionCredentialProvider>,
    ) -> Self {
        Self {
            source,
            session,
            emitter: Arc::new(NoopSyncEmitter::new()),
            records: RwLock::new(Arc::new(Vec::new())),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Route sync events to `emitter`.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn SyncEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    /// Current cache contents in source order.
    pub fn records(&self) -> Arc<Vec<NotificationRecord>> {
        Arc::clone(&self.records.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Whether at least one refresh is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Number of cached notifications not yet acknowledged.
    pub fn unread_count(&self) -> usize {
        unread_count(&self.records())
    }

    /// What a presentation layer should show right now.
    pub fn view(&self) -> SyncView {
        if self.is_loading() {
            return SyncView::Loading;
        }
        let records = self.records();
        if records.is_empty() {
            SyncView::Empty
        } else {
            SyncView::Populated(records)
        }
    }

    /// Replace the cache with the source's current list.
    ///
    /// Returns the number of records fetched. On failure the cache is left
    /// exactly as it was.
    pub async fn refresh(&self) -> Result<usize, SyncError> {
        let _loading = LoadingGuard::enter(&self.in_flight);
        self.emitter.emit(SyncEvent::RefreshStarted);

        match self.fetch_and_replace().await {
            Ok(snapshot) => {
                let count = snapshot.len();
                let unread = unread_count(&snapshot);
                info!(count, unread, "Notification cache refreshed");
                self.emitter
                    .emit(SyncEvent::RefreshCompleted { count, unread });
                Ok(count)
            }
            Err(err) => {
                error!(error = %err, "Error fetching notifications");
                self.emitter.emit(SyncEvent::RefreshFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Mark a notification as read on the source, then in the cache.
    ///
    /// The cache is only patched after the source confirms. Acknowledging
    /// an already-read notification leaves the cache unchanged.
    pub async fn acknowledge(&self, id: i64) -> Result<(), SyncError> {
        match self.confirm_and_patch(id).await {
            Ok(()) => {
                info!(id, "Notification marked as read");
                self.emitter.emit(SyncEvent::Acknowledged { id });
                Ok(())
            }
            Err(err) => {
                error!(id, error = %err, "Error marking notification as read");
                self.emitter.emit(SyncEvent::AcknowledgeFailed {
                    id,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Acknowledge every cached unread notification, one request each.
    ///
    /// Stops at the first failure. Notifications acknowledged before it stay
    /// acknowledged. Returns how many were acknowledged.
    pub async fn acknowledge_all(&self) -> Result<usize, SyncError> {
        let pending: Vec<i64> = self
            .records()
            .iter()
            .filter(|r| !r.is_read)
            .map(|r| r.id)
            .collect();

        debug!(count = pending.len(), "Acknowledging unread notifications");

        let mut acknowledged = 0;
        for id in pending {
            self.acknowledge(id).await?;
            acknowledged += 1;
        }
        Ok(acknowledged)
    }

    async fn require_credential(&self) -> Result<Credential, SyncError> {
        self.session.credential().await.ok_or_else(|| {
            warn!("No session credential available");
            SyncError::Unauthenticated
        })
    }

    async fn fetch_and_replace(&self) -> Result<Arc<Vec<NotificationRecord>>, SyncError> {
        let credential = self.require_credential().await?;

        debug!("Fetching notifications");
        let fetched = self
            .source
            .list(&credential)
            .await
            .map_err(|source| SyncError::FetchFailed { source })?;

        let snapshot = Arc::new(fetched);
        *self.records.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);
        Ok(snapshot)
    }

    async fn confirm_and_patch(&self, id: i64) -> Result<(), SyncError> {
        let credential = self.require_credential().await?;

        debug!(id, "Marking notification as read");
        self.source
            .mark_read(&credential, id)
            .await
            .map_err(|source| SyncError::UpdateFailed { id, source })?;

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        if records.iter().any(|r| r.id == id) {
            *records = Arc::new(mark_read(&records, id));
        } else {
            debug!(id, "Acknowledged notification is not cached");
        }
        Ok(())
    }
}
