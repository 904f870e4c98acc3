//! Authentication context for the storefront.
//!
//! Replaces ambient browser-storage token lookup with an explicitly
//! injected service: components that need the auth state receive an
//! [`AuthSession`], and login/logout are explicit state transitions.

mod error;
mod session;
mod store;
mod token;

pub use error::AuthError;
pub use session::AuthSession;
pub use store::{MemoryTokenStore, TokenStore};
pub use token::AuthToken;
