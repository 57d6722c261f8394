//! Session credential storage.
//!
//! The token is written by whatever signs the user in to the campus portal.
//! This client only reads it from `~/.campus/.credentials.json`.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::traits::CredentialsError;

/// The credentials directory name.
const CREDENTIALS_DIR: &str = ".campus";

/// The credentials file name.
const CREDENTIALS_FILE: &str = ".credentials.json";

/// The session credential for the campus backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    /// Opaque bearer token.
    #[serde(alias = "access_token")]
    pub token: Option<String>,
}

impl Credentials {
    /// Credentials carrying the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Check if the credentials have a usable token.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// The `Authorization` header value, if a token is present.
    pub fn bearer(&self) -> Option<String> {
        if !self.has_token() {
            return None;
        }
        self.token.as_deref().map(|t| format!("Bearer {}", t.trim()))
    }
}

/// Reads the credentials file.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    /// Path to the credentials file.
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Create a manager for the default location under the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let credentials_path = home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE);
        Some(Self { credentials_path })
    }

    /// Create a manager for an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: path.into(),
        }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Load credentials from the credentials file.
    ///
    /// A missing file is `Ok(None)`; an unreadable or malformed one is an error.
    pub fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        if !self.credentials_path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.credentials_path)
            .map_err(|e| CredentialsError::Read(e.to_string()))?;
        let reader = BufReader::new(file);
        let creds: Credentials = serde_json::from_reader(reader)
            .map_err(|e| CredentialsError::Malformed(e.to_string()))?;

        Ok(creds.has_token().then_some(creds))
    }
}
