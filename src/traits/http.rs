//! The HTTP seam used to reach the campus backend.
//!
//! Only GET is needed: the profile endpoint is read-only.

use async_trait::async_trait;
use bytes::Bytes;
use std::borrow::Cow;
use std::collections::HashMap;

/// Request or response headers. Names are compared case-insensitively by
/// [`Response::header`]; the map itself keeps whatever casing it was given.
pub type Headers = HashMap<String, String>;

/// A response that made it back from the server, whatever its status.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: body.into(),
        }
    }

    /// Attach a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Look up a header by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text; invalid UTF-8 is replaced rather than rejected.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Failure to get any response at all.
///
/// A non-2xx answer is not an `HttpError`; it arrives as an `Ok(Response)`
/// and is classified by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Headers arrived but the body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Issues GET requests.
///
/// Production code uses [`ReqwestHttpClient`](crate::adapters::ReqwestHttpClient);
/// tests use [`MockHttpClient`](crate::adapters::mock::MockHttpClient).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
