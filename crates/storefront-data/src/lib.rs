//! Backend API client for the storefront.
//!
//! This crate provides:
//! - `ApiClient` - HTTP client with per-call timeouts and bearer auth
//! - `StoreApi` - The trait seam the app layer talks to
//! - `HttpStoreApi` - The production implementation over `ApiClient`
//!
//! Calls are one-shot: no retry, no polling, no cancellation. A page
//! that goes away before a response arrives simply never observes it.

mod api;
mod client;
mod error;
mod timeout;

pub use api::*;
pub use client::*;
pub use error::*;
pub use timeout::*;
