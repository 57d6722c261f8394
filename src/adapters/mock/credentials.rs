//! Scriptable credentials double.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::auth::credentials::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

#[derive(Debug, Default)]
struct Script {
    credentials: Option<Credentials>,
    fail: bool,
}

/// Credentials held in memory. Clones share state, so a test can keep a
/// handle and change the token after the client has been built.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    script: Arc<Mutex<Script>>,
    loads: Arc<AtomicUsize>,
}

impl InMemoryCredentials {
    /// Signed out.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.set_credentials(Some(Credentials::with_token(token)));
        provider
    }

    /// Make every subsequent `load` fail.
    pub fn set_load_should_fail(&self, fail: bool) {
        if let Ok(mut script) = self.script.lock() {
            script.fail = fail;
        }
    }

    pub fn set_credentials(&self, credentials: Option<Credentials>) {
        if let Ok(mut script) = self.script.lock() {
            script.credentials = credentials;
        }
    }

    /// How many times `load` has been called.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let script = self
            .script
            .lock()
            .map_err(|e| CredentialsError::LoadFailed(e.to_string()))?;
        if script.fail {
            return Err(CredentialsError::LoadFailed("scripted failure".to_string()));
        }
        Ok(script.credentials.clone())
    }
}
