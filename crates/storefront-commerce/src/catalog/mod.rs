//! Catalog types and section derivers.

mod product;
pub mod views;

pub use product::*;
pub use views::SECTION_CAP;
