//! Category page: the uncapped catalog slice for one category.

use storefront_commerce::catalog::views;
use storefront_core::{PageContext, Route, StorefrontConfig};
use storefront_data::StoreApi;
use storefront_observability::StructuredLogger;

use crate::sections::{render_footer, render_section, SectionConfig};
use crate::state::{CatalogFetcher, CatalogState};
use crate::{current_timestamp, pages::render_error_view};

/// Render the category page. Matching is case-insensitive and the
/// slice is never capped; an unknown category renders the section
/// empty state rather than an error.
pub async fn render_category(
    config: &StorefrontConfig,
    api: &dyn StoreApi,
    category: &str,
) -> String {
    let route = Route::Category(category.to_string());
    let ctx = PageContext::new(route.path());
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_page("category")
        .with_route(&ctx.path);

    let mut fetcher = CatalogFetcher::new();
    fetcher.load(api, &logger).await;

    let body = match fetcher.state() {
        CatalogState::Error(message) => render_error_view(message),
        state => {
            let catalog = state.products().unwrap_or_default();
            let slice = views::by_category(catalog, category);
            logger
                .info_builder("Category resolved")
                .field("category", category.to_string())
                .field_i64("matches", slice.len() as i64)
                .field_i64("elapsed_us", ctx.elapsed_us() as i64)
                .emit();

            // Cap at the slice length so no "View all" link appears.
            let section = SectionConfig::new(category, slice.len().max(1), Route::Products);
            let mut body = render_section(&section, &slice, current_timestamp());
            body.push_str(&render_footer(&config.name));
            body
        }
    };

    let title = format!("{} | {}", category, config.name);
    super::render_document(config, &title, &body)
}
