//! Typed client-side navigation targets.
//!
//! Components never build path strings by hand; they produce a `Route`
//! and the shell turns it into an href. This keeps the set of navigable
//! destinations in one place.

use serde::{Deserialize, Serialize};
use storefront_commerce::ProductId;

/// A client-side navigation target consumed by the storefront UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Landing page.
    Home,
    /// Full product listing.
    Products,
    /// Product detail page.
    Product(ProductId),
    /// Category listing page.
    Category(String),
    /// Product comparison page; the selected product travels as
    /// navigation state alongside this route.
    Compare,
    /// Login page.
    Login,
    /// Customer dashboard.
    Dashboard,
    /// Contact page.
    Contact,
}

impl Route {
    /// Render the client-side path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::Product(id) => format!("/product/{}", id),
            Route::Category(slug) => format!("/category/{}", slug_encode(slug)),
            Route::Compare => "/compare".to_string(),
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Contact => "/contact".to_string(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Percent-encode a category label into a URL slug segment.
fn slug_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push_str("%20"),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Products.path(), "/products");
        assert_eq!(Route::Compare.path(), "/compare");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Contact.path(), "/contact");
    }

    #[test]
    fn test_product_path() {
        let route = Route::Product(ProductId::new("p-42"));
        assert_eq!(route.path(), "/product/p-42");
    }

    #[test]
    fn test_category_path_encodes_slug() {
        assert_eq!(
            Route::Category("Home & Garden".to_string()).path(),
            "/category/Home%20%26%20Garden"
        );
        assert_eq!(
            Route::Category("books".to_string()).path(),
            "/category/books"
        );
    }
}
