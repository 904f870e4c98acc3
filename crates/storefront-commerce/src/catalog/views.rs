//! Section derivers: pure functions computing named subsets of the
//! catalog for one display section each.
//!
//! Every deriver is synchronous, borrows from the full catalog, and is
//! recomputed on each render. Sorting derivers use a stable sort with no
//! secondary key, so ties resolve in original catalog order.

use crate::catalog::product::{Product, NEW_ARRIVAL_WINDOW_SECS};

/// Maximum number of products per derived section.
pub const SECTION_CAP: usize = 8;

/// Products created within the last 7 days, first `SECTION_CAP` in
/// catalog order. Intentionally not re-sorted by recency.
pub fn new_arrivals(catalog: &[Product], now: i64) -> Vec<&Product> {
    catalog
        .iter()
        .filter(|p| p.created_at > now - NEW_ARRIVAL_WINDOW_SECS)
        .take(SECTION_CAP)
        .collect()
}

/// Top products by view count, descending.
pub fn trending(catalog: &[Product]) -> Vec<&Product> {
    let mut products: Vec<&Product> = catalog.iter().collect();
    products.sort_by(|a, b| b.views.cmp(&a.views));
    products.truncate(SECTION_CAP);
    products
}

/// Top products by sales count, descending.
pub fn best_sellers(catalog: &[Product]) -> Vec<&Product> {
    let mut products: Vec<&Product> = catalog.iter().collect();
    products.sort_by(|a, b| b.sales.cmp(&a.sales));
    products.truncate(SECTION_CAP);
    products
}

/// Editorially featured products, first `SECTION_CAP` in catalog order.
pub fn featured(catalog: &[Product]) -> Vec<&Product> {
    catalog
        .iter()
        .filter(|p| p.featured)
        .take(SECTION_CAP)
        .collect()
}

/// All products whose category matches `name` case-insensitively.
/// Uncapped; callers cap independently. Case folding is ASCII-only, so
/// labels differing only in non-ASCII case ("Café" vs "CAFÉ") do not
/// match.
pub fn by_category<'a>(catalog: &'a [Product], name: &str) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(name))
        .collect()
}

/// Distinct category labels, alphabetically sorted, empty labels dropped.
pub fn unique_categories(catalog: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = catalog
        .iter()
        .filter(|p| !p.category.is_empty())
        .map(|p| p.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    const NOW: i64 = 1_700_000_000;

    fn product(name: &str) -> Product {
        let mut p = Product::new(name, Money::new(1000, Currency::USD));
        p.created_at = 0;
        p
    }

    fn catalog() -> Vec<Product> {
        let mut fresh = product("fresh");
        fresh.created_at = NOW - 3600;
        fresh.views = 10;

        let mut stale = product("stale");
        stale.created_at = NOW - NEW_ARRIVAL_WINDOW_SECS - 3600;
        stale.views = 50;
        stale.sales = 9;

        let mut popular = product("popular");
        popular.created_at = NOW - 3600;
        popular.views = 100;
        popular.featured = true;
        popular.category = "Electronics".to_string();

        let mut seller = product("seller");
        seller.sales = 40;
        seller.category = "electronics".to_string();

        vec![fresh, stale, popular, seller]
    }

    #[test]
    fn test_new_arrivals_filters_window_and_keeps_catalog_order() {
        let catalog = catalog();
        let arrivals = new_arrivals(&catalog, NOW);

        let names: Vec<&str> = arrivals.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fresh", "popular"]);
        for p in &arrivals {
            assert!(p.created_at > NOW - NEW_ARRIVAL_WINDOW_SECS);
        }
    }

    #[test]
    fn test_new_arrivals_capped_at_eight() {
        let mut catalog = Vec::new();
        for i in 0..20 {
            let mut p = product(&format!("p{}", i));
            p.created_at = NOW - 60;
            catalog.push(p);
        }
        assert_eq!(new_arrivals(&catalog, NOW).len(), SECTION_CAP);
    }

    #[test]
    fn test_trending_sorted_by_views_desc() {
        let catalog = catalog();
        let trending = trending(&catalog);

        let names: Vec<&str> = trending.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["popular", "stale", "fresh", "seller"]);
    }

    #[test]
    fn test_trending_ties_preserve_catalog_order() {
        let mut catalog = Vec::new();
        for name in ["a", "b", "c"] {
            let mut p = product(name);
            p.views = 7;
            catalog.push(p);
        }
        let names: Vec<&str> = trending(&catalog).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_best_sellers_sorted_by_sales_desc() {
        let catalog = catalog();
        let names: Vec<&str> = best_sellers(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names[0], "seller");
        assert_eq!(names[1], "stale");
    }

    #[test]
    fn test_featured_filter() {
        let catalog = catalog();
        let featured = featured(&catalog);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "popular");
    }

    #[test]
    fn test_by_category_case_insensitive_uncapped() {
        let catalog = catalog();
        let matched = by_category(&catalog, "ELECTRONICS");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_by_category_non_ascii_case_not_folded() {
        let mut catalog = catalog();
        catalog.push({
            let mut p = product("espresso");
            p.category = "Café".to_string();
            p
        });

        assert_eq!(by_category(&catalog, "Café").len(), 1);
        assert!(by_category(&catalog, "CAFÉ").is_empty());
    }

    #[test]
    fn test_unique_categories_sorted_and_deduped() {
        let mut catalog = catalog();
        catalog.push({
            let mut p = product("dup");
            p.category = "Electronics".to_string();
            p
        });
        catalog.push({
            let mut p = product("book");
            p.category = "Books".to_string();
            p
        });

        let cats = unique_categories(&catalog);
        assert_eq!(cats, vec!["Books", "Electronics", "electronics"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<Product> = Vec::new();
        assert!(new_arrivals(&catalog, NOW).is_empty());
        assert!(trending(&catalog).is_empty());
        assert!(best_sellers(&catalog).is_empty());
        assert!(featured(&catalog).is_empty());
        assert!(by_category(&catalog, "any").is_empty());
        assert!(unique_categories(&catalog).is_empty());
    }
}
