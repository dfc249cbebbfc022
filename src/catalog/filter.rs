//! Catalog filter engine.
//!
//! A pure recomputation over the catalog: no caching, no incremental patching.
//! Callers re-run [`filter_products`] whenever the query, the category or the
//! catalog changes.

use crate::domain::Product;

/// Filters products by name text and category.
///
/// A product is kept iff both hold:
/// - its name contains `query`, compared case-insensitively (empty query matches all)
/// - its category equals `category` exactly (`None` or `Some("")` matches all;
///   products without a category never match a selected one)
///
/// The result preserves catalog order and the input is never modified.
///
/// # Examples
///
/// ```
/// use storefront::catalog::filter_products;
/// use storefront::domain::Product;
///
/// let products = vec![
///     Product::new(1, "Ahmet Hoca TYT Matematik", "TYT", ""),
///     Product::new(2, "Limit Türev İntegral", "AYT", ""),
/// ];
///
/// let hits = filter_products(&products, "ahmet", None);
/// assert_eq!(hits.len(), 1);
/// assert!(filter_products(&products, "", Some("AYT"))[0].id == 2);
/// ```
#[must_use]
pub fn filter_products(products: &[Product], query: &str, category: Option<&str>) -> Vec<Product> {
    let _span = tracing::debug_span!(
        "filter_products",
        total_products = products.len(),
        query_len = query.len(),
        category = ?category
    )
    .entered();

    let needle = query.to_lowercase();
    let category = category.filter(|c| !c.is_empty());

    let filtered: Vec<Product> = products
        .iter()
        .filter(|product| matches_text(product, &needle) && matches_category(product, category))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "catalog filter applied");
    filtered
}

/// `needle` must already be lowercased.
fn matches_text(product: &Product, needle: &str) -> bool {
    needle.is_empty() || product.name.to_lowercase().contains(needle)
}

fn matches_category(product: &Product, category: Option<&str>) -> bool {
    category.map_or(true, |wanted| product.category() == Some(wanted))
}

/// Byte ranges of `query` occurrences in `name`, for match highlighting.
///
/// Matching is case-insensitive. Ranges are `(start, end)` with exclusive end
/// and are only produced when lowercasing does not change byte offsets; for
/// names where it would (some non-ASCII letters), no highlight is returned.
#[must_use]
pub fn match_ranges(name: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack = name.to_lowercase();
    let needle = query.to_lowercase();
    if haystack.len() != name.len() {
        return vec![];
    }

    haystack
        .match_indices(&needle)
        .map(|(start, m)| (start, start + m.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Ahmet Hoca TYT Matematik", "TYT", "a"),
            Product::new(2, "AYT Fizik Soru Bankası", "AYT", "b"),
            Product::new(3, "Ahmet Hoca AYT Geometri", "AYT", "c"),
            Product::new(4, "Paragraf Denemeleri", "TYT", "d"),
            Product {
                id: 5,
                name: "Kategorisiz Ahmet".to_string(),
                category: None,
                image: String::new(),
            },
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_filters_is_identity() {
        let catalog = sample();
        assert_eq!(filter_products(&catalog, "", None), catalog);
    }

    #[test]
    fn query_is_case_insensitive() {
        let catalog = sample();
        let upper = filter_products(&catalog, "AHMET", None);
        let lower = filter_products(&catalog, "ahmet", None);
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec![1, 3, 5]);
    }

    #[test]
    fn category_is_exact_match() {
        let catalog = sample();
        assert_eq!(ids(&filter_products(&catalog, "", Some("AYT"))), vec![2, 3]);
        assert_eq!(ids(&filter_products(&catalog, "", Some("TYT"))), vec![1, 4]);
        assert!(filter_products(&catalog, "", Some("tyt")).is_empty());
    }

    #[test]
    fn empty_category_matches_all() {
        let catalog = sample();
        assert_eq!(filter_products(&catalog, "", Some("")), catalog);
    }

    #[test]
    fn predicates_are_anded() {
        let catalog = sample();
        assert_eq!(ids(&filter_products(&catalog, "ahmet", Some("AYT"))), vec![3]);
    }

    #[test]
    fn missing_category_never_matches_selected_category() {
        let catalog = sample();
        let hits = filter_products(&catalog, "kategorisiz", Some("TYT"));
        assert!(hits.is_empty());
        assert_eq!(ids(&filter_products(&catalog, "kategorisiz", None)), vec![5]);
    }

    #[test]
    fn result_is_ordered_subsequence() {
        let catalog = sample();
        for (query, category) in [("a", None), ("hoca", Some("AYT")), ("i", Some("TYT"))] {
            let result = filter_products(&catalog, query, category);
            let mut positions = result
                .iter()
                .map(|p| catalog.iter().position(|c| c == p).unwrap());
            let mut last = None;
            for pos in &mut positions {
                assert!(last.map_or(true, |l| pos > l));
                last = Some(pos);
            }
        }
    }

    #[test]
    fn empty_catalog_yields_empty() {
        assert!(filter_products(&[], "x", None).is_empty());
    }

    #[test]
    fn match_ranges_find_every_occurrence() {
        assert_eq!(match_ranges("Deneme Deneme", "DEN"), vec![(0, 3), (7, 10)]);
        assert!(match_ranges("Deneme", "").is_empty());
        assert!(match_ranges("Deneme", "xyz").is_empty());
    }
}
