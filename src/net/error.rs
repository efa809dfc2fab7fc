//! Error type shared by all REST helpers.
//!
//! Remote calls never panic and never leak exceptions into the UI tree;
//! every failure is converted into an `ApiError` value the caller can match
//! on or display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a remote REST call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a recognized `{"error": ...}` body.
    #[error("{0}")]
    Server(String),
    /// The request never produced a response (offline, CORS, SSR stub).
    #[error("network error: {0}")]
    Network(String),
    /// The server failed but its error shape was unrecognized.
    #[error("Unknown error")]
    Unknown,
}

impl ApiError {
    /// Decode a failed response body.
    ///
    /// The services answer errors as `{"error": "..."}`, occasionally as
    /// `{"message": "..."}`. Anything else maps to [`ApiError::Unknown`].
    pub fn from_error_body(body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: Option<String>,
            message: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed
                .error
                .or(parsed.message)
                .map_or(Self::Unknown, Self::Server),
            Err(_) => Self::Unknown,
        }
    }
}
