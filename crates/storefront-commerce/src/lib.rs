//! E-commerce domain types and logic for the marketplace storefront.
//!
//! This crate provides the presentation-layer domain model:
//!
//! - **Catalog**: products, vendors, statuses, specifications
//! - **Views**: pure section derivers (new arrivals, trending, best
//!   sellers, featured, per-category) computed from the full catalog
//! - **Money**: cents-based prices with a single consolidated formatter
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let catalog: Vec<Product> = fetch_catalog().await?;
//! let arrivals = views::new_arrivals(&catalog, now);
//! for product in arrivals {
//!     println!("{} {}", product.name, product.price.display());
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use catalog::{
    Product, ProductStatus, Specification, Vendor, NEW_ARRIVAL_WINDOW_SECS, SECTION_CAP,
};
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{
        views, Product, ProductStatus, Specification, Vendor, NEW_ARRIVAL_WINDOW_SECS,
        SECTION_CAP,
    };
}
