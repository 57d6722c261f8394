//! Network-related error types.
//!
//! Failures to get a usable answer from the campus backend: transport
//! problems and non-2xx responses.

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Connection to the server failed.
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("Request to '{url}' timed out: {message}")]
    Timeout { url: String, message: String },

    /// The request URL could not be built.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// HTTP status error (non-2xx response).
    ///
    /// `message` is the server's own explanation, when its body had one.
    #[error("HTTP {status} error{}", message_suffix(.message))]
    HttpStatus {
        status: u16,
        message: Option<String>,
    },

    /// Generic network error.
    #[error("Network error: {message}")]
    Other { message: String },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl NetworkError {
    /// Classify a transport error from the HTTP seam.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        let url = url.to_string();
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed { url, message },
            HttpError::Timeout(message) => NetworkError::Timeout { url, message },
            HttpError::InvalidUrl(message) => NetworkError::InvalidUrl { url, message },
            HttpError::Body(message) | HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Check if this error is likely transient and worth a manual retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::Other { .. } => false,
        }
    }

    /// Whether the server rejected the session credential.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status: 401, .. })
    }

    /// The server-provided explanation, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            NetworkError::HttpStatus { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}
