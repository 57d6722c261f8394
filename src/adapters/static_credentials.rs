//! Credentials provider for a token handed over on the command line or
//! through the environment.

use async_trait::async_trait;

use crate::auth::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

/// Always yields the same token.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::with_token(token),
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("has_token", &self.credentials.has_token())
            .finish()
    }
}

#[async_trait]
impl CredentialsProvider for StaticCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        Ok(self
            .credentials
            .has_token()
            .then(|| self.credentials.clone()))
    }
}
