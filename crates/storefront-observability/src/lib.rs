//! Structured logging for the storefront.
//!
//! Logs are request-id correlated and written to stderr only; nothing is
//! shipped to an external collector.

mod logging;

pub use logging::*;
