//! Page and component UI state.
//!
//! All state here is owned by one page or one card instance. Nothing is
//! shared or persisted: a remounted card starts from defaults, and the
//! catalog belongs exclusively to the page that fetched it.

use std::time::Duration;

use storefront_commerce::Product;
use storefront_data::StoreApi;
use storefront_observability::StructuredLogger;

/// Catalog fetch lifecycle. The three states are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Request in flight; render skeletons.
    Loading,
    /// Request failed; render the full-page error view.
    Error(String),
    /// Catalog available.
    Ready(Vec<Product>),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CatalogState::Error(_))
    }

    /// The catalog, when ready.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            CatalogState::Ready(products) => Some(products),
            _ => None,
        }
    }
}

/// Fetches the catalog once per page view.
///
/// No retry, no polling. A failed fetch stays failed until the user
/// manually reloads the page.
#[derive(Debug)]
pub struct CatalogFetcher {
    state: CatalogState,
}

impl CatalogFetcher {
    /// Create a fetcher in the loading state.
    pub fn new() -> Self {
        Self {
            state: CatalogState::Loading,
        }
    }

    /// Issue the single catalog request and settle into ready or error.
    pub async fn load(&mut self, api: &dyn StoreApi, logger: &StructuredLogger) {
        logger.debug("Catalog fetch started");
        match api.fetch_products().await {
            Ok(products) => {
                logger
                    .info_builder("Catalog loaded")
                    .field_i64("count", products.len() as i64)
                    .emit();
                self.state = CatalogState::Ready(products);
            }
            Err(e) => {
                logger
                    .error_builder("Catalog fetch failed")
                    .field("error", e.to_string())
                    .emit();
                self.state = CatalogState::Error(e.to_string());
            }
        }
    }

    /// Current fetch state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }
}

impl Default for CatalogFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient per-card flags. Reset whenever the card is rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    /// Pointer currently over the card.
    pub hovered: bool,
    /// Product is in the wishlist as far as this card knows.
    pub wishlisted: bool,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hero background carousel.
///
/// Auto-advances every [`Carousel::AUTO_ADVANCE`] and can be stepped
/// manually via indicator controls. The driving timer belongs to the
/// hosting component and dies with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    slide_count: usize,
}

impl Carousel {
    /// Auto-advance period.
    pub const AUTO_ADVANCE: Duration = Duration::from_secs(8);

    /// Create a carousel over `slide_count` slides, starting at the
    /// first.
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            slide_count: slide_count.max(1),
        }
    }

    /// Currently displayed slide index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.slide_count;
    }

    /// Jump to a slide via an indicator control. Out-of-range indices
    /// are ignored.
    pub fn step_to(&mut self, index: usize) {
        if index < self.slide_count {
            self.current = index;
        }
    }
}
