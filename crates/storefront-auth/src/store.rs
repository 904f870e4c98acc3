//! Token persistence behind an explicit, injected interface.

use crate::token::AuthToken;
use std::sync::RwLock;

/// Where the session token lives between page views.
///
/// The storefront never reaches into ambient storage directly; it is
/// handed a `TokenStore` and asks it. Implementations may be backed by
/// browser storage, a keychain, or memory (tests).
pub trait TokenStore: Send + Sync {
    /// The currently stored token, if any.
    fn token(&self) -> Option<AuthToken>;

    /// Store a token, replacing any existing one.
    fn store(&self, token: AuthToken);

    /// Remove the stored token.
    fn clear(&self);
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<AuthToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token.
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<AuthToken> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: AuthToken) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::UserId;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.token().is_none());

        let token = AuthToken::generate(UserId::new("u1"));
        store.store(token.clone());
        assert_eq!(store.token(), Some(token));

        store.clear();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_store_replaces_existing() {
        let first = AuthToken::generate(UserId::new("u1"));
        let second = AuthToken::generate(UserId::new("u1"));
        let store = MemoryTokenStore::with_token(first);

        store.store(second.clone());
        assert_eq!(store.token(), Some(second));
    }
}
