//! Command handlers.
//!
//! Each handler receives the composed `CliContext` and delegates to the
//! sync service or the session store.

pub mod list;
pub mod read;
pub mod session;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use inbox_core::{
        Credential, NotificationRecord, NotificationSourcePort, NotificationSync, SourceError,
        SourceResult, StaticCredentialProvider,
    };
    use tempfile::TempDir;

    use crate::bootstrap::{CliContext, SessionSource};
    use crate::session::FileSessionStore;

    /// In-memory notification source.
    pub struct FakeSource {
        pub records: Mutex<Vec<NotificationRecord>>,
        pub reject: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl NotificationSourcePort for FakeSource {
        async fn list(&self, _credential: &Credential) -> SourceResult<Vec<NotificationRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn mark_read(&self, _credential: &Credential, id: i64) -> SourceResult<()> {
            if self.reject.lock().unwrap().contains(&id) {
                return Err(SourceError::Status {
                    status: 500,
                    url: format!("http://test/notifications/{id}"),
                });
            }
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(SourceError::NotFound { id })?;
            record.is_read = true;
            Ok(())
        }
    }

    pub fn record(id: i64, is_read: bool) -> NotificationRecord {
        NotificationRecord {
            id,
            title: format!("Title {id}"),
            message: format!("Message {id}"),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            is_read,
        }
    }

    /// Context backed by `records`, signed in unless `signed_in` is false.
    pub fn context(
        dir: &TempDir,
        records: Vec<NotificationRecord>,
        reject: Vec<i64>,
        signed_in: bool,
    ) -> CliContext {
        let source = Arc::new(FakeSource {
            records: Mutex::new(records),
            reject: Mutex::new(reject),
        });
        let provider = if signed_in {
            StaticCredentialProvider::new(Credential::new("tok").unwrap())
        } else {
            StaticCredentialProvider::anonymous()
        };

        CliContext {
            sync: Arc::new(NotificationSync::new(source, Arc::new(provider))),
            sessions: Arc::new(FileSessionStore::new(dir.path().join("access_token"))),
            session_source: SessionSource::Override,
            base_url: "http://test".to_string(),
        }
    }
}
