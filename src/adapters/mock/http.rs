//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors for testing purposes.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
    /// Wait before producing the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    /// A JSON body with the given status.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }

    /// Delay this response.
    pub fn after(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

#[derive(Debug, Default)]
struct Routes {
    fixed: HashMap<String, MockResponse>,
    queued: HashMap<String, VecDeque<MockResponse>>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

impl Routes {
    /// Queued one-shot responses first, in push order, then the fixed
    /// response for the URL, then the fallback.
    fn next(&mut self, url: &str) -> Option<MockResponse> {
        self.queued
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.fixed.get(url).cloned())
            .or_else(|| self.fallback.clone())
    }
}

/// Scripted [`HttpClient`]. Clones share routes and the request log.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response(
///     "http://campus.test/api/auth/me",
///     MockResponse::json(200, serde_json::json!({"name": "Jane Doe"})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Routes>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn routes(&self) -> MutexGuard<'_, Routes> {
        self.routes.lock().unwrap()
    }

    /// Answer every request to `url` with `response`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.routes().fixed.insert(url.to_string(), response);
    }

    /// Answer the next unanswered request to `url` with `response`.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        self.routes()
            .queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Answer requests to any URL without its own response.
    pub fn set_default_response(&self, response: MockResponse) {
        self.routes().fallback = Some(response);
    }

    /// Every request seen so far, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.routes().requests.clone()
    }
}

async fn resolve(response: MockResponse) -> Result<Response, HttpError> {
    let mut current = response;
    loop {
        match current {
            MockResponse::Success(response) => return Ok(response),
            MockResponse::Error(err) => return Err(err),
            MockResponse::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                current = *inner;
            }
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let scripted = {
            let mut routes = self.routes();
            routes.requests.push(RecordedRequest {
                method: "GET".to_string(),
                url: url.to_string(),
                headers: headers.clone(),
            });
            routes.next(url)
        };

        match scripted {
            Some(response) => resolve(response).await,
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
