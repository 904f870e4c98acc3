//! Auth error types.

use thiserror::Error;

/// Errors that can occur in authentication operations.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No token is stored; the user is not logged in.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The stored token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token is malformed or otherwise invalid.
    #[error("Invalid token")]
    InvalidToken,

    /// Token store failure.
    #[error("Token store error: {0}")]
    StoreError(String),
}
