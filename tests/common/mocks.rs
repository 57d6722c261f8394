//! Mock-backed fixtures.
//!
//! Re-exports the in-crate test doubles and adds a small builder for
//! wiring them into a [`ProfileClient`].

pub use campus_profile::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
pub use campus_profile::traits::{HttpError, Response};

use std::sync::Arc;

use campus_profile::client::ProfileClient;
use serde_json::Value;

pub const MOCK_URL: &str = "http://campus.test/api/auth/me";

/// Builder for a `ProfileClient` over in-memory doubles.
pub struct MockProfileSetup {
    http: MockHttpClient,
    credentials: InMemoryCredentials,
}

impl MockProfileSetup {
    pub fn new() -> Self {
        Self {
            http: MockHttpClient::new(),
            credentials: InMemoryCredentials::new(),
        }
    }

    pub fn with_token(self, token: &str) -> Self {
        Self {
            credentials: InMemoryCredentials::with_token(token),
            ..self
        }
    }

    /// Answer every request with `body`.
    pub fn with_json(self, status: u16, body: Value) -> Self {
        self.http.set_response(MOCK_URL, MockResponse::json(status, body));
        self
    }

    /// Answer the next request only.
    pub fn then_json(self, status: u16, body: Value) -> Self {
        self.http.push_response(MOCK_URL, MockResponse::json(status, body));
        self
    }

    pub fn with_transport_error(self, err: HttpError) -> Self {
        self.http.set_response(MOCK_URL, MockResponse::Error(err));
        self
    }

    /// The client plus the HTTP double, for request assertions.
    pub fn build(self) -> (ProfileClient, MockHttpClient) {
        let client = ProfileClient::new(
            Arc::new(self.http.clone()),
            Arc::new(self.credentials),
            MOCK_URL,
        );
        (client, self.http)
    }
}

impl Default for MockProfileSetup {
    fn default() -> Self {
        Self::new()
    }
}
