//! Error types for the cat fact client.
//!
//! # Design
//! Three failure classes reach the caller, and none of them is retried or
//! recovered inside the crate. Transport-level trouble (connect, DNS, TLS,
//! timeout) is `Network`. A response that arrived but carries a non-2xx
//! status is `HttpStatus` with the raw status code and body. A 2xx response
//! whose body does not match the expected shape is `Decode`.

use thiserror::Error;

/// Errors returned by `CatFactClient` parse methods, transports, and
/// `CatFactService` operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or did not complete in time.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code carried by an `HttpStatus` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
