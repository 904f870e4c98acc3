//! Product card renderer.

use storefront_commerce::Product;
use storefront_core::Route;

use super::html_escape;

/// Shown when a product has no images or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder-product.svg";

/// Render one product card.
pub fn render_card(product: &Product, now: i64) -> String {
    let href = Route::Product(product.id.clone()).path();
    let image = product.primary_image().unwrap_or(PLACEHOLDER_IMAGE);

    let new_badge = if product.is_new(now) {
        r#"<span class="badge badge-new">New</span>"#
    } else {
        ""
    };

    let price_html = render_price(product);
    let stars = render_stars(product.rating);

    let stock_html = if product.is_in_stock() {
        format!(
            r#"<span class="stock in-stock">{} available</span>"#,
            product.quantity
        )
    } else {
        r#"<span class="stock out-of-stock">Out of stock</span>"#.to_string()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    {new_badge}
    <a href="{href}" class="product-link">
        <div class="product-image">
            <img src="{image}" alt="{name}" loading="lazy" onerror="this.src='{placeholder}'">
        </div>
        <div class="product-info">
            <p class="product-brand">{brand}</p>
            <h3 class="product-name">{name}</h3>
            <p class="product-category">{category}</p>
            <div class="product-rating">
                {stars}
                <span class="rating-value">{rating:.1}</span>
            </div>
            {price_html}
            {stock_html}
        </div>
    </a>
    <div class="product-actions">
        <button class="action add-to-cart" data-product-id="{id}" {cart_disabled}>Add to Cart</button>
        <button class="action wishlist-toggle" data-product-id="{id}" aria-label="Toggle wishlist">&#9825;</button>
        <button class="action quick-view" data-product-id="{id}">Quick View</button>
        <button class="action compare" data-product-id="{id}">Compare</button>
    </div>
</article>"#,
        id = html_escape(product.id.as_str()),
        new_badge = new_badge,
        href = href,
        image = html_escape(image),
        placeholder = PLACEHOLDER_IMAGE,
        name = html_escape(&product.name),
        brand = html_escape(&product.brand),
        category = html_escape(&product.category),
        stars = stars,
        rating = product.rating,
        price_html = price_html,
        stock_html = stock_html,
        cart_disabled = if product.is_in_stock() { "" } else { "disabled" },
    )
}

/// Render the price block: current price, and when the product is on
/// sale, the struck-through original price and the discount badge.
fn render_price(product: &Product) -> String {
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => format!(
            r#"<div class="product-price">
                <span class="price-current">{}</span>
                <span class="price-original">{}</span>
                <span class="price-discount">-{}%</span>
            </div>"#,
            product.price.display(),
            original.display(),
            percent
        ),
        _ => format!(
            r#"<div class="product-price">
                <span class="price-current">{}</span>
            </div>"#,
            product.price.display()
        ),
    }
}

/// Render a five-glyph star rating: `floor(rating)` full stars, one
/// half star when the rating has any fractional part, empty stars for
/// the rest. Always exactly five glyphs.
pub fn render_stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full_stars = rating.floor() as usize;
    let has_half = rating.fract() > 0.0 && full_stars < 5;
    let empty_stars = 5 - full_stars - usize::from(has_half);

    let mut html = String::from(r#"<span class="stars">"#);

    for _ in 0..full_stars {
        html.push_str(r#"<span class="star full">★</span>"#);
    }
    if has_half {
        html.push_str(r#"<span class="star half">★</span>"#);
    }
    for _ in 0..empty_stars {
        html.push_str(r#"<span class="star empty">☆</span>"#);
    }

    html.push_str("</span>");
    html
}
