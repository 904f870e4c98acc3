//! Home page: hero, derived product sections, services, footer.

use storefront_commerce::catalog::views;
use storefront_commerce::Product;
use storefront_core::{PageContext, Route, StorefrontConfig};
use storefront_data::StoreApi;
use storefront_observability::StructuredLogger;

use crate::sections::{
    default_services, render_footer, render_hero, render_section, render_section_loading,
    render_services, HeroContent, SectionConfig,
};
use crate::state::{CatalogFetcher, CatalogState};
use crate::{current_timestamp, sections::html_escape};

/// Render the home page: one catalog fetch, then all sections derived
/// from it. A failed fetch yields the full-page error view.
pub async fn render_home(config: &StorefrontConfig, api: &dyn StoreApi) -> String {
    let ctx = PageContext::new(Route::Home.path());
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_page("home")
        .with_route(&ctx.path);

    let mut fetcher = CatalogFetcher::new();
    fetcher.load(api, &logger).await;

    let body = match fetcher.state() {
        CatalogState::Error(message) => render_error_view(message),
        state => {
            let catalog = state.products().unwrap_or_default();
            logger.debug("Rendering home sections");
            render_home_body(config, catalog)
        }
    };

    logger
        .info_builder("Home page rendered")
        .field_i64("bytes", body.len() as i64)
        .field_i64("elapsed_us", ctx.elapsed_us() as i64)
        .emit();

    super::render_document(config, &config.default_title, &body)
}

/// The home page body for a ready catalog.
pub fn render_home_body(config: &StorefrontConfig, catalog: &[Product]) -> String {
    let now = current_timestamp();
    let hero = HeroContent::default();

    let mut body = String::new();
    body.push_str(&render_hero(&hero, &hero.carousel()));
    body.push_str(&render_category_nav(catalog));

    for (slice, section) in home_sections(catalog, now) {
        body.push_str(&render_section(&section, &slice, now));
    }

    body.push_str(&render_services(&default_services()));
    body.push_str(&render_footer(&config.name));
    body
}

/// The derived slices and their display configs, in page order.
fn home_sections(catalog: &[Product], now: i64) -> Vec<(Vec<&Product>, SectionConfig)> {
    vec![
        (
            views::new_arrivals(catalog, now),
            SectionConfig::new("New Arrivals", 8, Route::Products),
        ),
        (
            views::trending(catalog),
            SectionConfig::new("Trending Now", 8, Route::Products),
        ),
        (
            views::featured(catalog),
            SectionConfig::new("Featured", 6, Route::Products),
        ),
        (
            views::best_sellers(catalog),
            SectionConfig::new("Best Sellers", 6, Route::Products),
        ),
    ]
}

/// Category quick links derived from the catalog.
fn render_category_nav(catalog: &[Product]) -> String {
    let categories = views::unique_categories(catalog);
    if categories.is_empty() {
        return String::new();
    }

    let links: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}" class="category-link">{}</a>"#,
                Route::Category(c.clone()).path(),
                html_escape(c)
            )
        })
        .collect();

    format!(
        r#"<nav class="category-nav" data-section="categories">
    {}
</nav>"#,
        links
    )
}

/// Skeleton body shown while the catalog request is in flight.
pub fn render_home_skeleton(config: &StorefrontConfig) -> String {
    let hero = HeroContent::default();

    let mut body = String::new();
    body.push_str(&render_hero(&hero, &hero.carousel()));
    for title in ["New Arrivals", "Trending Now", "Featured", "Best Sellers"] {
        body.push_str(&render_section_loading(title));
    }
    body.push_str(&render_footer(&config.name));
    body
}

/// Full-page error view with a manual reload action. No automatic
/// retry.
pub fn render_error_view(message: &str) -> String {
    format!(
        r#"<section class="page-error" data-section="error">
    <div class="error-state">
        <span class="error-icon">&#9888;</span>
        <h2>Unable to load the store</h2>
        <p>{}</p>
        <button onclick="location.reload()">Try Again</button>
    </div>
</section>"#,
        html_escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::{Currency, Money};

    fn config() -> StorefrontConfig {
        StorefrontConfig::new("Bazaar")
    }

    fn catalog() -> Vec<Product> {
        let now = current_timestamp();
        (0..3)
            .map(|i| {
                let mut p = Product::new(format!("Item {}", i), Money::new(1500, Currency::USD));
                p.category = "Gadgets".to_string();
                p.created_at = now - 60;
                p.views = i;
                p
            })
            .collect()
    }

    #[test]
    fn test_home_body_section_order() {
        let html = render_home_body(&config(), &catalog());

        let hero = html.find(r#"data-section="hero""#).unwrap();
        let arrivals = html.find(r#"data-section="new-arrivals""#).unwrap();
        let trending = html.find(r#"data-section="trending-now""#).unwrap();
        let services = html.find(r#"data-section="services""#).unwrap();
        let footer = html.find(r#"data-section="footer""#).unwrap();

        assert!(hero < arrivals);
        assert!(arrivals < trending);
        assert!(trending < services);
        assert!(services < footer);
    }

    #[test]
    fn test_home_body_empty_catalog_uses_empty_states() {
        let html = render_home_body(&config(), &[]);
        assert!(html.contains("empty-state"));
        assert!(!html.contains("product-grid"));
        assert!(!html.contains("category-nav"));
    }

    #[test]
    fn test_category_nav_links() {
        let html = render_home_body(&config(), &catalog());
        assert!(html.contains(r#"href="/category/Gadgets""#));
    }

    #[test]
    fn test_skeleton_has_loading_sections() {
        let html = render_home_skeleton(&config());
        assert_eq!(html.matches("product-section loading").count(), 4);
    }

    #[test]
    fn test_error_view_has_reload_action() {
        let html = render_error_view("connection refused");
        assert!(html.contains("connection refused"));
        assert!(html.contains("location.reload()"));
    }
}
