//! File-backed session store.
//!
//! Persists the `access_token` of the signed-in user so that subsequent
//! invocations can authenticate without passing `--token` every time.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use inbox_core::{Credential, SessionCredentialProvider};
use tracing::{debug, warn};

use crate::error::CliError;

/// File name of the stored token inside the config directory.
pub const ACCESS_TOKEN_FILE: &str = "access_token";

/// Session store keeping the access token in a single file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/inbox/access_token`
    pub fn default_path() -> Result<PathBuf, CliError> {
        dirs::config_dir()
            .map(|dir| dir.join("inbox").join(ACCESS_TOKEN_FILE))
            .ok_or_else(|| CliError::Config("cannot determine config directory".to_string()))
    }

    /// Location of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored credential. A missing or blank file means no session.
    pub async fn load(&self) -> Result<Option<Credential>, CliError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Credential::new(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist `credential`, replacing any previous session.
    pub async fn store(&self, credential: &Credential) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, credential.expose()).await?;
        restrict_permissions(&self.path).await?;
        debug!(path = %self.path.display(), "Session stored");
        Ok(())
    }

    /// Remove the stored session. Returns whether one existed.
    pub async fn clear(&self) -> Result<bool, CliError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl SessionCredentialProvider for FileSessionStore {
    async fn credential(&self) -> Option<Credential> {
        match self.load().await {
            Ok(credential) => credential,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read session");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("nested").join(ACCESS_TOKEN_FILE))
    }

    #[test]
    fn test_missing_file_is_no_session() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let loaded = tokio_test::block_on(store.load()).unwrap();
        assert!(loaded.is_none());
        assert!(tokio_test::block_on(store.credential()).is_none());
    }

    #[test]
    fn test_store_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let credential = Credential::new("abc.def").unwrap();

        tokio_test::block_on(store.store(&credential)).unwrap();

        let loaded = tokio_test::block_on(store.credential()).unwrap();
        assert_eq!(loaded, credential);
    }

    #[test]
    fn test_clear_reports_presence() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio_test::block_on(store.store(&Credential::new("x").unwrap())).unwrap();

        assert!(tokio_test::block_on(store.clear()).unwrap());
        assert!(!tokio_test::block_on(store.clear()).unwrap());
        assert!(tokio_test::block_on(store.load()).unwrap().is_none());
    }

    #[test]
    fn test_blank_file_is_no_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ACCESS_TOKEN_FILE);
        std::fs::write(&path, "\n").unwrap();

        let store = FileSessionStore::new(path);
        assert!(tokio_test::block_on(store.load()).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio_test::block_on(store.store(&Credential::new("x").unwrap())).unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
