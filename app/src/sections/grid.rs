//! Section renderer: a titled product grid with loading, empty, and
//! populated modes. The three modes are mutually exclusive.

use storefront_commerce::Product;
use storefront_core::Route;

use super::card::render_card;
use super::html_escape;

/// Number of skeleton cards shown while the catalog loads.
pub const SKELETON_CARDS: usize = 6;

/// Display configuration for one grid section.
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// Section heading.
    pub title: String,
    /// Maximum cards rendered; call sites use 6 or 8.
    pub cap: usize,
    /// Where "View all" navigates. Always a navigation, never in-place
    /// pagination.
    pub view_all: Route,
}

impl SectionConfig {
    pub fn new(title: impl Into<String>, cap: usize, view_all: Route) -> Self {
        Self {
            title: title.into(),
            cap,
            view_all,
        }
    }
}

/// Render a populated or empty section from a derived catalog slice.
pub fn render_section(config: &SectionConfig, products: &[&Product], now: i64) -> String {
    if products.is_empty() {
        return render_section_empty(&config.title);
    }

    let cards: String = products
        .iter()
        .take(config.cap)
        .map(|p| render_card(p, now))
        .collect();

    let view_all = if products.len() > config.cap {
        format!(
            r#"<a href="{}" class="view-all">View all</a>"#,
            config.view_all.path()
        )
    } else {
        String::new()
    };

    format!(
        r#"<section class="product-section" data-section="{slug}">
    <div class="section-header">
        <h2>{title}</h2>
        {view_all}
    </div>
    <div class="product-grid">
        {cards}
    </div>
</section>"#,
        slug = section_slug(&config.title),
        title = html_escape(&config.title),
        view_all = view_all,
        cards = cards,
    )
}

/// Render the empty-state branch: icon, message, and a browse-all
/// action. Rendered instead of an empty grid.
pub fn render_section_empty(title: &str) -> String {
    format!(
        r#"<section class="product-section empty" data-section="{slug}">
    <div class="empty-state">
        <span class="empty-icon">&#128230;</span>
        <h2>{title}</h2>
        <p>No products to show here yet.</p>
        <a href="{browse}" class="browse-all">Browse all products</a>
    </div>
</section>"#,
        slug = section_slug(title),
        title = html_escape(title),
        browse = Route::Products.path(),
    )
}

/// Render skeleton placeholders while the catalog loads.
pub fn render_section_loading(title: &str) -> String {
    let cards: String = (0..SKELETON_CARDS)
        .map(|_| {
            r#"<div class="product-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="product-section loading" data-section="{slug}">
    <div class="section-header"><h2>{title}</h2></div>
    <div class="product-grid">
        {cards}
    </div>
</section>"#,
        slug = section_slug(title),
        title = html_escape(title),
        cards = cards,
    )
}

fn section_slug(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::{Currency, Money};

    const NOW: i64 = 1_700_000_000;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| {
                let mut p = Product::new(format!("Item {}", i), Money::new(1000, Currency::USD));
                p.created_at = 0;
                p
            })
            .collect()
    }

    fn config(cap: usize) -> SectionConfig {
        SectionConfig::new("Trending Now", cap, Route::Products)
    }

    #[test]
    fn test_empty_slice_renders_empty_state_not_empty_grid() {
        let html = render_section(&config(8), &[], NOW);
        assert!(html.contains("empty-state"));
        assert!(html.contains("Browse all products"));
        assert!(!html.contains("product-grid"));
    }

    #[test]
    fn test_populated_caps_cards() {
        let products = products(10);
        let refs: Vec<&Product> = products.iter().collect();

        let html = render_section(&config(6), &refs, NOW);
        assert_eq!(html.matches("product-card").count(), 6);
    }

    #[test]
    fn test_view_all_only_when_slice_exceeds_cap() {
        let products = products(10);
        let refs: Vec<&Product> = products.iter().collect();

        let html = render_section(&config(6), &refs, NOW);
        assert!(html.contains(r#"href="/products" class="view-all""#));

        let html = render_section(&config(6), &refs[..4], NOW);
        assert!(!html.contains("view-all"));
    }

    #[test]
    fn test_loading_renders_fixed_skeleton_count() {
        let html = render_section_loading("New Arrivals");
        assert_eq!(html.matches("skeleton-image").count(), SKELETON_CARDS);
    }

    #[test]
    fn test_section_slug() {
        let html = render_section_loading("New Arrivals");
        assert!(html.contains(r#"data-section="new-arrivals""#));
    }
}
