//! The store API surface consumed by the app layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use storefront_auth::AuthToken;
use storefront_commerce::{Product, ProductId};

use crate::client::ApiClient;
use crate::error::FetchError;

/// Response envelope for `GET /products`. A missing `products` field
/// deserializes to an empty catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Body for `POST /cart`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartRequest<'a> {
    product_id: &'a str,
    quantity: i64,
}

/// Body for `POST /user/wishlist`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WishlistRequest<'a> {
    product_id: &'a str,
}

/// Backend operations the storefront issues.
///
/// Pages and actions depend on this trait rather than on HTTP directly,
/// so tests can substitute a mock and assert on call counts.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// Fetch the full catalog. One request per page view.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Add a product to the cart. Requires a bearer token.
    async fn add_to_cart(
        &self,
        token: &AuthToken,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), FetchError>;

    /// Add a product to the wishlist. Requires a bearer token.
    async fn add_to_wishlist(
        &self,
        token: &AuthToken,
        product_id: &ProductId,
    ) -> Result<(), FetchError>;

    /// Remove a product from the wishlist. Requires a bearer token.
    async fn remove_from_wishlist(
        &self,
        token: &AuthToken,
        product_id: &ProductId,
    ) -> Result<(), FetchError>;
}

/// Production `StoreApi` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStoreApi {
    client: ApiClient,
}

impl HttpStoreApi {
    /// Create an API over the given client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let resp: ProductsResponse = self.client.get_json("/products").await?;
        Ok(resp.products)
    }

    async fn add_to_cart(
        &self,
        token: &AuthToken,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), FetchError> {
        let body = CartRequest {
            product_id: product_id.as_str(),
            quantity,
        };
        self.client.post_json("/cart", &body, token.bearer()).await
    }

    async fn add_to_wishlist(
        &self,
        token: &AuthToken,
        product_id: &ProductId,
    ) -> Result<(), FetchError> {
        let body = WishlistRequest {
            product_id: product_id.as_str(),
        };
        self.client
            .post_json("/user/wishlist", &body, token.bearer())
            .await
    }

    async fn remove_from_wishlist(
        &self,
        token: &AuthToken,
        product_id: &ProductId,
    ) -> Result<(), FetchError> {
        let path = format!("/user/wishlist/{}", product_id.as_str());
        self.client.delete(&path, token.bearer()).await
    }
}
