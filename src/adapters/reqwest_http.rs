//! [`HttpClient`] backed by reqwest.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Sent with every request so backend logs can tell the terminal client apart.
pub const USER_AGENT: &str = concat!("campus-profile/", env!("CARGO_PKG_VERSION"));

/// Production HTTP client.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client without a request deadline.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|err| {
            tracing::warn!("Falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        });
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else if err.is_builder() {
        HttpError::InvalidUrl(message)
    } else if err.is_body() || err.is_decode() {
        HttpError::Body(message)
    } else {
        HttpError::Other(message)
    }
}

/// Header values that are not visible ASCII are dropped.
fn collect_headers(map: &HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            });

        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let response_headers = collect_headers(response.headers());
        let body = response.bytes().await.map_err(classify)?;

        tracing::debug!(url, status, bytes = body.len(), "GET finished");

        Ok(Response {
            status,
            headers: response_headers,
            body,
        })
    }
}
