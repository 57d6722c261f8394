//! Where the session token comes from.
//!
//! The token is written by whatever signed the user in; this crate only
//! reads it, once per fetch.

use async_trait::async_trait;

use crate::auth::Credentials;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    /// No home directory to look for the default credentials file in.
    #[error("Could not determine the home directory")]
    NoHomeDir,
    /// The credentials file exists but could not be read.
    #[error("Could not read credentials file: {0}")]
    Read(String),
    /// The credentials file is not the JSON we expect.
    #[error("Credentials file is malformed: {0}")]
    Malformed(String),
    #[error("Failed to load credentials: {0}")]
    LoadFailed(String),
}

/// Supplies the current session credential.
///
/// `Ok(None)` means the user has not signed in; that is distinct from a
/// credential store that exists but cannot be read.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError>;
}
