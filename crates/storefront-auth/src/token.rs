//! Bearer tokens for authenticated API calls.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use storefront_commerce::UserId;

/// A bearer token issued by the backend at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// The token value sent as `Authorization: Bearer <token>`.
    pub token: String,
    /// User ID this token belongs to.
    pub user_id: UserId,
    /// Unix timestamp when the token was issued.
    pub issued_at: i64,
    /// Unix timestamp when the token expires.
    pub expires_at: i64,
}

impl AuthToken {
    /// Default token lifetime: 30 days.
    pub const DEFAULT_EXPIRY_SECS: i64 = 30 * 24 * 60 * 60;

    /// Create a token from a backend-issued value.
    pub fn new(token: impl Into<String>, user_id: UserId, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            user_id,
            issued_at: current_timestamp(),
            expires_at,
        }
    }

    /// Generate a random token for the given user (test fixtures and
    /// local sessions).
    pub fn generate(user_id: UserId) -> Self {
        let now = current_timestamp();
        Self {
            token: generate_token_string(),
            user_id,
            issued_at: now,
            expires_at: now + Self::DEFAULT_EXPIRY_SECS,
        }
    }

    /// Check if the token is expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Validate the token for use in an authenticated call.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.token.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        if self.is_expired() {
            return Err(AuthError::TokenExpired);
        }
        Ok(())
    }

    /// The bearer value for the Authorization header.
    pub fn bearer(&self) -> &str {
        &self.token
    }
}

/// Generate a cryptographically secure token string.
fn generate_token_string() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 24] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
