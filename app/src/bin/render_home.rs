//! Render the home page against a live backend and print the HTML.
//!
//! Usage: `render-home [api-base]` (defaults to `http://localhost:8080/api`).

use storefront_app::pages::render_home;
use storefront_core::StorefrontConfig;
use storefront_data::{ApiClient, HttpStoreApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080/api".to_string());

    let config = StorefrontConfig::new("Bazaar")
        .with_api_base(&api_base)
        .with_title("Bazaar Marketplace")
        .with_css("/assets/main.css");

    let api = HttpStoreApi::new(ApiClient::new(&config.api_base)?);
    let html = render_home(&config, &api).await;
    println!("{}", html);
    Ok(())
}
