//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileCredentialsProvider`] - Token read from the credentials file
//! - [`StaticCredentials`] - Token passed via `--token` / `CAMPUS_TOKEN`
//!
//! The [`mock`] submodule provides test doubles.

pub mod file_credentials;
pub mod mock;
pub mod reqwest_http;
pub mod static_credentials;

pub use file_credentials::FileCredentialsProvider;
pub use mock::{InMemoryCredentials, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
pub use static_credentials::StaticCredentials;
