//! Product and vendor types.

use crate::error::CommerceError;
use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Products created within this window count as "new arrivals": 7 days.
pub const NEW_ARRIVAL_WINDOW_SECS: i64 = 7 * 24 * 60 * 60;

/// Product visibility status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is active and visible to customers.
    #[default]
    Active,
    /// Product has been revoked by the marketplace, not visible.
    Revoked,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Revoked => "revoked",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(ProductStatus::Active),
            "revoked" => Some(ProductStatus::Revoked),
            _ => None,
        }
    }
}

/// A key/value product specification (e.g., "Material: Leather").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Specification {
    pub key: String,
    pub value: String,
}

impl Specification {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The vendor selling a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    /// Unique vendor identifier.
    pub id: VendorId,
    /// Customer-facing vendor name.
    pub display_name: String,
    /// Contact address (email or phone).
    #[serde(default)]
    pub contact: Option<String>,
}

impl Default for Vendor {
    fn default() -> Self {
        Self {
            id: VendorId::new(""),
            display_name: String::new(),
            contact: None,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Current selling price. Invariant: non-negative.
    pub price: Money,
    /// "Was" price for discount display. Display code checks that it
    /// actually exceeds `price` before rendering a discount.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Stock count. Zero means out of stock.
    #[serde(default)]
    pub quantity: i64,
    /// Free-text category label.
    #[serde(default)]
    pub category: String,
    /// Brand name.
    #[serde(default)]
    pub brand: String,
    /// Ordered list of image URLs; the first is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Key/value specifications.
    #[serde(default)]
    pub specifications: Vec<Specification>,
    /// Visibility status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
    /// Vendor selling this product.
    #[serde(default)]
    pub vendor: Vendor,
    /// View count used by the trending deriver.
    #[serde(default)]
    pub views: i64,
    /// Sales count used by the best-sellers deriver.
    #[serde(default)]
    pub sales: i64,
    /// Editorially featured flag.
    #[serde(default)]
    pub featured: bool,
    /// Average customer rating (0.0 to 5.0).
    #[serde(default)]
    pub rating: f64,
}

impl Product {
    /// Create a new active product.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: None,
            price,
            original_price: None,
            quantity: 0,
            category: String::new(),
            brand: String::new(),
            images: Vec::new(),
            specifications: Vec::new(),
            status: ProductStatus::Active,
            created_at: current_timestamp(),
            vendor: Vendor::default(),
            views: 0,
            sales: 0,
            featured: false,
            rating: 0.0,
        }
    }

    /// Validate the product invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::InvalidPrice(self.price.amount_cents));
        }
        if self.quantity < 0 {
            return Err(CommerceError::InvalidQuantity(self.quantity));
        }
        Ok(())
    }

    /// Check if the product is visible to customers.
    pub fn is_visible(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Check if the product is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Check if the product was created within the new-arrival window.
    pub fn is_new(&self, now: i64) -> bool {
        self.created_at > now - NEW_ARRIVAL_WINDOW_SECS
    }

    /// Check if the product is on sale (original price strictly exceeds
    /// the current price, in the same currency).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| {
                orig.currency == self.price.currency
                    && orig.amount_cents > self.price.amount_cents
            })
            .unwrap_or(false)
    }

    /// Discount percentage rounded to the nearest integer, when on sale.
    pub fn discount_percent(&self) -> Option<i64> {
        if !self.is_on_sale() {
            return None;
        }
        let orig = self.original_price?;
        let savings = orig.amount_cents - self.price.amount_cents;
        Some(((savings as f64 / orig.amount_cents as f64) * 100.0).round() as i64)
    }

    /// Amount saved against the original price, when on sale.
    pub fn savings(&self) -> Option<Money> {
        if !self.is_on_sale() {
            return None;
        }
        self.original_price?.try_subtract(&self.price)
    }

    /// First image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(price_cents: i64) -> Product {
        Product::new("Test Product", Money::new(price_cents, Currency::USD))
    }

    #[test]
    fn test_product_creation() {
        let p = product(2999);
        assert_eq!(p.name, "Test Product");
        assert!(p.is_visible());
        assert!(!p.is_in_stock());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let p = product(-100);
        assert!(matches!(p.validate(), Err(CommerceError::InvalidPrice(-100))));
    }

    #[test]
    fn test_discount_percent() {
        let mut p = product(8000);
        p.original_price = Some(Money::new(10000, Currency::USD));
        assert!(p.is_on_sale());
        assert_eq!(p.discount_percent(), Some(20));
        assert_eq!(p.savings().unwrap().amount_cents, 2000);
    }

    #[test]
    fn test_discount_percent_rounds_to_nearest() {
        let mut p = product(2000);
        p.original_price = Some(Money::new(3000, Currency::USD));
        // 33.33...% rounds down to 33
        assert_eq!(p.discount_percent(), Some(33));
    }

    #[test]
    fn test_original_price_not_exceeding_price_is_not_a_sale() {
        let mut p = product(10000);
        p.original_price = Some(Money::new(10000, Currency::USD));
        assert!(!p.is_on_sale());
        assert_eq!(p.discount_percent(), None);

        p.original_price = Some(Money::new(9000, Currency::USD));
        assert!(!p.is_on_sale());
    }

    #[test]
    fn test_is_new_window() {
        let now = 1_700_000_000;
        let mut p = product(1000);

        p.created_at = now - NEW_ARRIVAL_WINDOW_SECS + 60;
        assert!(p.is_new(now));

        p.created_at = now - NEW_ARRIVAL_WINDOW_SECS - 60;
        assert!(!p.is_new(now));
    }

    #[test]
    fn test_primary_image() {
        let mut p = product(1000);
        assert_eq!(p.primary_image(), None);

        p.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(p.primary_image(), Some("a.jpg"));
    }

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(ProductStatus::from_str("active"), Some(ProductStatus::Active));
        assert_eq!(ProductStatus::from_str("Revoked"), Some(ProductStatus::Revoked));
        assert_eq!(ProductStatus::from_str("draft"), None);
        assert_eq!(ProductStatus::Revoked.as_str(), "revoked");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "p1",
            "name": "Minimal",
            "price": { "amount_cents": 500, "currency": "USD" }
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.views, 0);
        assert_eq!(p.sales, 0);
        assert!(!p.featured);
        assert_eq!(p.status, ProductStatus::Active);
        assert!(p.images.is_empty());
    }
}
