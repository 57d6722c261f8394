//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable, optionally delayed responses
//! - [`InMemoryCredentials`] - In-memory credential storage

pub mod credentials;
pub mod http;

pub use credentials::InMemoryCredentials;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
