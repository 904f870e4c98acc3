//! Session state with explicit login/logout transitions.

use crate::store::TokenStore;
use crate::token::AuthToken;
use std::sync::Arc;

/// The auth state injected into pages and components.
///
/// Wraps a [`TokenStore`] so that "is the user logged in" has one answer
/// per session, and login/logout are explicit transitions rather than
/// side effects on ambient storage.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn TokenStore>,
}

impl AuthSession {
    /// Create a session over the given token store.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// A logged-out session over an empty in-memory store.
    pub fn anonymous() -> Self {
        Self::new(Arc::new(crate::store::MemoryTokenStore::new()))
    }

    /// A logged-in session over an in-memory store holding `token`.
    pub fn authenticated(token: AuthToken) -> Self {
        Self::new(Arc::new(crate::store::MemoryTokenStore::with_token(token)))
    }

    /// Check whether a valid (present, unexpired) token is available.
    pub fn is_logged_in(&self) -> bool {
        self.store
            .token()
            .map(|t| t.validate().is_ok())
            .unwrap_or(false)
    }

    /// The current token, if present and valid.
    pub fn token(&self) -> Option<AuthToken> {
        self.store.token().filter(|t| t.validate().is_ok())
    }

    /// Transition to logged-in with a backend-issued token.
    pub fn login(&self, token: AuthToken) {
        self.store.store(token);
    }

    /// Transition to logged-out, dropping the stored token.
    pub fn logout(&self) {
        self.store.clear();
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;
    use storefront_commerce::UserId;

    fn session() -> AuthSession {
        AuthSession::new(Arc::new(MemoryTokenStore::new()))
    }

    #[test]
    fn test_anonymous_by_default() {
        let session = session();
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_login_logout_transitions() {
        let session = session();
        let token = AuthToken::generate(UserId::new("u1"));

        session.login(token.clone());
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some(token));

        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_expired_token_counts_as_logged_out() {
        let session = session();
        let mut token = AuthToken::generate(UserId::new("u1"));
        token.expires_at = 0;

        session.login(token);
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
    }
}
