//! Marketplace storefront application.
//!
//! Pages fetch the catalog through [`storefront_data::StoreApi`], derive
//! display sections with `storefront_commerce::catalog::views`, and
//! render HTML through the section renderers. User actions either call
//! one-shot backend endpoints or produce typed navigation targets.

pub mod actions;
pub mod pages;
pub mod sections;
pub mod state;

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
