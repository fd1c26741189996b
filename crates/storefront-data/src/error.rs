//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to build the client or send the request.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// HTTP error response.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl FetchError {
    /// Check if the server answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Http { .. })
    }
}
