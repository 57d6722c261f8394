//! Fetches the current user's profile from the campus backend.

use std::sync::Arc;

use serde_json::Value;

use crate::adapters::{FileCredentialsProvider, ReqwestHttpClient, StaticCredentials};
use crate::config::ProfileConfig;
use crate::error::{FetchError, FetchResult, NetworkError};
use crate::models::UserProfile;
use crate::traits::{CredentialsProvider, Headers, HttpClient};

/// One-request client for `GET /api/auth/me`.
///
/// Cheap to clone; clones share the underlying HTTP client and
/// credential provider.
#[derive(Clone)]
pub struct ProfileClient {
    http: Arc<dyn HttpClient>,
    credentials: Arc<dyn CredentialsProvider>,
    url: String,
}

impl std::fmt::Debug for ProfileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileClient").field("url", &self.url).finish()
    }
}

impl ProfileClient {
    pub fn new(
        http: Arc<dyn HttpClient>,
        credentials: Arc<dyn CredentialsProvider>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            credentials,
            url: url.into(),
        }
    }

    /// Production client: reqwest plus the configured credential source.
    ///
    /// An explicit token wins over a credentials file; an explicit file
    /// wins over the default location. Credential problems surface from
    /// [`fetch_profile`](Self::fetch_profile), never from construction.
    pub fn from_config(config: &ProfileConfig) -> Self {
        let http: Arc<dyn HttpClient> = match config.timeout {
            Some(timeout) => Arc::new(ReqwestHttpClient::with_timeout(timeout)),
            None => Arc::new(ReqwestHttpClient::new()),
        };

        let credentials: Arc<dyn CredentialsProvider> = match (&config.token, &config.credentials_file) {
            (Some(token), _) => Arc::new(StaticCredentials::new(token.clone())),
            (None, Some(path)) => Arc::new(FileCredentialsProvider::with_path(path)),
            (None, None) => Arc::new(FileCredentialsProvider::new()),
        };

        Self::new(http, credentials, config.profile_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the profile.
    ///
    /// `Ok(None)` means the backend answered successfully without a profile.
    pub async fn fetch_profile(&self) -> FetchResult<Option<UserProfile>> {
        let credentials = self.credentials.load().await?;
        let bearer = credentials
            .and_then(|c| c.bearer())
            .ok_or(FetchError::MissingCredentials)?;

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), bearer);
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(url = %self.url, "Fetching profile");
        let response = self
            .http
            .get(&self.url, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, &self.url))?;

        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: extract_error_message(&response.body),
            }
            .into());
        }

        UserProfile::from_slice(&response.body).map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })
    }
}

/// The `message` string of a JSON error body, if there is a non-empty one.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
