//! Hero banner with a background-image carousel.

use storefront_core::Route;

use super::html_escape;
use crate::state::Carousel;

/// Fixed marketing content for the hero section.
#[derive(Debug, Clone)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_route: Route,
    /// Background images cycled by the carousel.
    pub backgrounds: Vec<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Discover Something New".to_string(),
            subheadline: "Thousands of products from independent vendors, all in one place".to_string(),
            cta_text: "Shop Now".to_string(),
            cta_route: Route::Products,
            backgrounds: vec![
                "/assets/hero/market.jpg".to_string(),
                "/assets/hero/electronics.jpg".to_string(),
                "/assets/hero/fashion.jpg".to_string(),
            ],
        }
    }
}

impl HeroContent {
    /// A carousel sized to this content's backgrounds.
    pub fn carousel(&self) -> Carousel {
        Carousel::new(self.backgrounds.len())
    }
}

/// Render the hero section. The slide at `carousel.current()` is marked
/// active; the rest stay in the DOM for the crossfade transition.
pub fn render_hero(content: &HeroContent, carousel: &Carousel) -> String {
    let slides: String = content
        .backgrounds
        .iter()
        .enumerate()
        .map(|(i, url)| {
            let active = if i == carousel.current() { " active" } else { "" };
            format!(
                r#"<div class="hero-slide{}" style="background-image: url('{}')"></div>"#,
                active,
                html_escape(url)
            )
        })
        .collect();

    let indicators: String = (0..content.backgrounds.len())
        .map(|i| {
            let active = if i == carousel.current() { " active" } else { "" };
            format!(
                r#"<button class="hero-indicator{}" data-slide="{}" aria-label="Slide {}"></button>"#,
                active,
                i,
                i + 1
            )
        })
        .collect();

    format!(
        r#"<section class="hero" data-section="hero" data-interval="{interval}">
    <div class="hero-slides">
        {slides}
    </div>
    <div class="hero-content animate-rise">
        <h1 class="hero-headline">{headline}</h1>
        <p class="hero-subheadline">{subheadline}</p>
        <a href="{cta_url}" class="hero-cta">{cta_text}</a>
    </div>
    <div class="hero-indicators">
        {indicators}
    </div>
</section>"#,
        interval = Carousel::AUTO_ADVANCE.as_millis(),
        slides = slides,
        headline = html_escape(&content.headline),
        subheadline = html_escape(&content.subheadline),
        cta_url = content.cta_route.path(),
        cta_text = html_escape(&content.cta_text),
    )
}
