//! Error type for fetch operations.

/// Errors from backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Map a reqwest error into the fetch taxonomy.
    pub(crate) fn from_reqwest(e: reqwest::Error, url: &str) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}
