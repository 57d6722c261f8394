//! Session credential handling.
//!
//! Signing in happens elsewhere; this module only knows where the resulting
//! token lives and how to turn it into an `Authorization` header.

pub mod credentials;

pub use credentials::{Credentials, CredentialsManager};
