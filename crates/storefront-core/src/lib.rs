//! Core abstractions for the storefront application.
//!
//! This crate provides:
//! - `StorefrontConfig` - Application configuration builder
//! - `RequestId` / `PageContext` - Per-page-view correlation and timing
//! - `Route` - Typed client-side navigation targets

mod config;
mod context;
mod routes;

pub use config::*;
pub use context::*;
pub use routes::*;
