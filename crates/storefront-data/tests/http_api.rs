//! Integration tests for the HTTP store API against a mock backend.

use httpmock::prelude::*;
use serde_json::json;

use storefront_auth::AuthToken;
use storefront_commerce::{ProductId, UserId};
use storefront_data::{ApiClient, FetchError, HttpStoreApi, StoreApi};

fn api_for(server: &MockServer) -> HttpStoreApi {
    let client = ApiClient::new(server.base_url()).expect("client");
    HttpStoreApi::new(client)
}

fn token() -> AuthToken {
    AuthToken::new("test-bearer-token", UserId::new("u1"), i64::MAX)
}

#[tokio::test]
async fn fetch_products_reads_envelope() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(json!({
            "products": [
                {
                    "id": "p1",
                    "name": "Desk Lamp",
                    "price": { "amount_cents": 2499, "currency": "USD" },
                    "quantity": 5,
                    "category": "Home",
                    "views": 12
                }
            ]
        }));
    });

    let products = api_for(&server).fetch_products().await.unwrap();

    mock.assert();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Desk Lamp");
    assert_eq!(products[0].price.amount_cents, 2499);
    assert_eq!(products[0].views, 12);
    assert_eq!(products[0].sales, 0); // defaulted
}

#[tokio::test]
async fn fetch_products_missing_field_is_empty_catalog() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(json!({}));
    });

    let products = api_for(&server).fetch_products().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn fetch_products_surfaces_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(500);
    });

    let err = api_for(&server).fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 500, .. }));
}

#[tokio::test]
async fn add_to_cart_posts_bearer_and_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cart")
            .header("authorization", "Bearer test-bearer-token")
            .json_body(json!({ "productId": "p1", "quantity": 2 }));
        then.status(200);
    });

    api_for(&server)
        .add_to_cart(&token(), &ProductId::new("p1"), 2)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn unauthorized_cart_call_maps_to_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/cart");
        then.status(401);
    });

    let err = api_for(&server)
        .add_to_cart(&token(), &ProductId::new("p1"), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Unauthorized(_)));
}

#[tokio::test]
async fn wishlist_add_and_remove_hit_expected_paths() {
    let server = MockServer::start();
    let add = server.mock(|when, then| {
        when.method(POST)
            .path("/user/wishlist")
            .json_body(json!({ "productId": "p9" }));
        then.status(200);
    });
    let remove = server.mock(|when, then| {
        when.method(DELETE).path("/user/wishlist/p9");
        then.status(200);
    });

    let api = api_for(&server);
    let id = ProductId::new("p9");
    api.add_to_wishlist(&token(), &id).await.unwrap();
    api.remove_from_wishlist(&token(), &id).await.unwrap();

    add.assert();
    remove.assert();
}
