//! Immutable catalog store.
//!
//! The [`Catalog`] is loaded once and never mutated afterwards. It wraps an
//! `Arc<[Product]>`, so every consumer (view mounts, renders, the filter engine)
//! shares one allocation and cloning the catalog is a reference-count bump.

use crate::domain::error::{Result, StorefrontError};
use crate::domain::Product;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

/// On-disk document shape: `{ "products": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Ordered, read-only collection of products.
///
/// # Invariants
///
/// - Product ids are unique (checked on construction)
/// - The product order is the document order and never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Builds a catalog from products, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Catalog`] if two products share an id.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::catalog::Catalog;
    /// use storefront::domain::Product;
    ///
    /// let catalog = Catalog::from_products(vec![
    ///     Product::new(1, "Kitap A", "TYT", "a.png"),
    ///     Product::new(2, "Kitap B", "AYT", "b.png"),
    /// ])?;
    /// assert_eq!(catalog.len(), 2);
    /// # Ok::<(), storefront::StorefrontError>(())
    /// ```
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(StorefrontError::Catalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        tracing::debug!(product_count = products.len(), "catalog built");

        Ok(Self {
            products: products.into(),
        })
    }

    /// Parses a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Json`] if the document does not match the
    /// schema, or [`StorefrontError::Catalog`] on duplicate ids.
    pub fn from_json(document: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(document)?;
        Self::from_products(document.products)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category keys present in the catalog, in first-appearance order.
    ///
    /// Products without a category contribute nothing. Used to populate the
    /// category picker, so any key present in the data is selectable.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter_map(Product::category)
            .filter(|c| !c.is_empty() && seen.insert(*c))
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_in_order() {
        let catalog = Catalog::from_json(
            r#"{"products": [
                {"id": 2, "name": "B", "category": "AYT", "image": "b"},
                {"id": 1, "name": "A", "category": "TYT", "image": "a"}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<i64> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_json(
            r#"{"products": [
                {"id": 1, "name": "A", "category": "TYT", "image": "a"},
                {"id": 1, "name": "B", "category": "AYT", "image": "b"}
            ]}"#,
        )
        .unwrap_err();

        assert!(matches!(err, StorefrontError::Catalog(_)));
    }

    #[test]
    fn rejects_document_without_products_field() {
        let err = Catalog::from_json(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, StorefrontError::Json(_)));
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let catalog = Catalog::from_products(vec![
            Product::new(1, "A", "TYT", ""),
            Product::new(2, "B", "AYT", ""),
            Product::new(3, "C", "TYT", ""),
            Product {
                id: 4,
                name: "D".to_string(),
                category: None,
                image: String::new(),
            },
            Product::new(5, "E", "KPSS", ""),
        ])
        .unwrap();

        assert_eq!(catalog.categories(), vec!["TYT", "AYT", "KPSS"]);
    }

    #[test]
    fn clones_share_storage() {
        let catalog = Catalog::from_products(vec![Product::new(1, "A", "TYT", "")]).unwrap();
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.products(), clone.products()));
    }
}
