//! Error types for profile fetching.
//!
//! | Kind                | Shown as                               | Retryable      |
//! |---------------------|----------------------------------------|----------------|
//! | Transport failure   | `Failed to load profile`               | Yes            |
//! | Non-2xx response    | server `message`, else the generic one | 5xx/408/429    |
//! | Bad 2xx payload     | `Failed to load profile`               | No             |
//! | No session token    | sign-in hint                           | After sign-in  |
//!
//! A successful response without a profile is not an error; it is the
//! controller's `Empty` state.

mod fetch;
mod network;

pub use fetch::{FetchError, GENERIC_FETCH_MESSAGE, MISSING_TOKEN_MESSAGE};
pub use network::NetworkError;

/// Result of a profile fetch.
pub type FetchResult<T> = Result<T, FetchError>;
