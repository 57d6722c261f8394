//! Client configuration.
//!
//! Layering is defaults, then environment, then command-line flags (see
//! [`crate::cli::Cli::apply`]).

use std::path::PathBuf;
use std::time::Duration;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// The "current authenticated user" endpoint.
pub const PROFILE_PATH: &str = "/api/auth/me";

pub const ENV_API_URL: &str = "CAMPUS_API_URL";
pub const ENV_TOKEN: &str = "CAMPUS_TOKEN";
pub const ENV_CREDENTIALS_FILE: &str = "CAMPUS_CREDENTIALS_FILE";
pub const ENV_TIMEOUT_SECS: &str = "CAMPUS_TIMEOUT_SECS";

/// Where to fetch the profile from and with which credential.
///
/// # Example
///
/// ```
/// use campus_profile::config::ProfileConfig;
///
/// let config = ProfileConfig::new().with_base_url("https://campus.example.edu/");
/// assert_eq!(config.profile_url(), "https://campus.example.edu/api/auth/me");
/// ```
#[derive(Clone, PartialEq)]
pub struct ProfileConfig {
    /// Backend origin, e.g. `https://campus.example.edu`
    pub base_url: String,
    /// Path of the current-user endpoint
    pub profile_path: String,
    /// Request timeout; `None` leaves the HTTP client's default
    pub timeout: Option<Duration>,
    /// Token that overrides the credentials file
    pub token: Option<String>,
    /// Credentials file that overrides `~/.campus/.credentials.json`
    pub credentials_file: Option<PathBuf>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_path: PROFILE_PATH.to_string(),
            timeout: None,
            token: None,
            credentials_file: None,
        }
    }
}

impl std::fmt::Debug for ProfileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileConfig")
            .field("base_url", &self.base_url)
            .field("profile_path", &self.profile_path)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("credentials_file", &self.credentials_file)
            .finish()
    }
}

impl ProfileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_profile_path(mut self, path: impl Into<String>) -> Self {
        self.profile_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Defaults overridden by `CAMPUS_*` environment variables.
    ///
    /// Empty variables are ignored, as is a timeout that is not a whole
    /// number of seconds.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_var(ENV_API_URL) {
            config.base_url = url;
        }
        if let Some(token) = env_var(ENV_TOKEN) {
            config.token = Some(token);
        }
        if let Some(path) = env_var(ENV_CREDENTIALS_FILE) {
            config.credentials_file = Some(PathBuf::from(path));
        }
        if let Some(secs) = env_var(ENV_TIMEOUT_SECS) {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, secs),
            }
        }

        config
    }

    /// Full URL of the profile endpoint.
    pub fn profile_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.profile_path.trim_start_matches('/')
        )
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
