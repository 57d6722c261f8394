//! Errors from a single profile fetch.

use super::network::NetworkError;
use crate::traits::CredentialsError;

/// Shown whenever no better explanation is available.
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to load profile";

/// Shown when there is no session token to send.
pub const MISSING_TOKEN_MESSAGE: &str = "No session token found. Sign in and refresh.";

/// Why a profile fetch did not produce a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or non-2xx response.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The credential store could not be read.
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// No token is stored, so no request was sent.
    #[error("no session token available")]
    MissingCredentials,

    /// A 2xx response whose body is not a profile object.
    #[error("invalid profile payload: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// The message the error state displays.
    ///
    /// Only a server-supplied message is surfaced verbatim; transport and
    /// decoding details go to the log, not the screen.
    pub fn display_message(&self) -> String {
        match self {
            FetchError::Network(err) => err
                .server_message()
                .unwrap_or(GENERIC_FETCH_MESSAGE)
                .to_string(),
            FetchError::MissingCredentials => MISSING_TOKEN_MESSAGE.to_string(),
            FetchError::Credentials(_) | FetchError::Decode { .. } => {
                GENERIC_FETCH_MESSAGE.to_string()
            }
        }
    }

    /// Whether pressing refresh again could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(err) => err.is_retryable(),
            FetchError::Credentials(_) | FetchError::MissingCredentials => true,
            FetchError::Decode { .. } => false,
        }
    }

    /// Whether the user has to sign in again before a refresh can work.
    pub fn requires_reauth(&self) -> bool {
        match self {
            FetchError::Network(err) => err.requires_reauth(),
            FetchError::MissingCredentials => true,
            FetchError::Credentials(_) | FetchError::Decode { .. } => false,
        }
    }

    /// Short code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network(err) => err.error_code(),
            FetchError::Credentials(_) => "E_CREDS",
            FetchError::MissingCredentials => "E_CREDS_MISSING",
            FetchError::Decode { .. } => "E_DECODE",
        }
    }
}
