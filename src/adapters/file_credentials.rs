//! File-based credentials provider adapter.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::traits::{CredentialsError, CredentialsProvider};

/// Reads the session token from the credentials file on every load, so a
/// token rewritten by the portal between refreshes is picked up.
///
/// Without a home directory there is no default file; every load then
/// fails with [`CredentialsError::NoHomeDir`].
#[derive(Debug, Clone)]
pub struct FileCredentialsProvider {
    manager: Option<CredentialsManager>,
}

impl FileCredentialsProvider {
    /// Provider for the default `~/.campus/.credentials.json`.
    pub fn new() -> Self {
        let manager = CredentialsManager::new();
        if manager.is_none() {
            tracing::warn!("No home directory; the default credentials file is unavailable");
        }
        Self { manager }
    }

    /// Provider for an explicit credentials file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            manager: Some(CredentialsManager::with_path(path)),
        }
    }

    /// The credentials file, if one could be located.
    pub fn credentials_path(&self) -> Option<&Path> {
        self.manager.as_ref().map(CredentialsManager::credentials_path)
    }
}

impl Default for FileCredentialsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        let manager = self.manager.clone().ok_or(CredentialsError::NoHomeDir)?;
        tokio::task::spawn_blocking(move || manager.load())
            .await
            .map_err(|e| CredentialsError::LoadFailed(e.to_string()))?
    }
}
