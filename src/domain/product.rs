//! Product domain model.
//!
//! A `Product` is one listable item of the catalog: a book, a question bank, a
//! trial exam booklet. Products are immutable once the catalog is loaded.

use serde::{Deserialize, Serialize};

/// A listable catalog item.
///
/// # Fields
///
/// - `id`: Identifier, unique within a catalog
/// - `name`: Display name, the text matched by search
/// - `category`: Exact-match filter key (`"TYT"`, `"AYT"`, ...). Documents may
///   omit it; such products never match a selected category.
/// - `image`: Asset reference used as the product picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Creates a product with every field present.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::domain::Product;
    ///
    /// let product = Product::new(7, "Kitap A", "TYT", "x");
    /// assert_eq!(product.name, "Kitap A");
    /// assert_eq!(product.category(), Some("TYT"));
    /// ```
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: Some(category.into()),
            image: image.into(),
        }
    }

    /// Returns the category key, if the product has one.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the image reference, falling back to the shared placeholder
    /// asset when the document left it empty.
    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }
}

/// Asset shown for products without their own picture.
pub const PLACEHOLDER_IMAGE: &str = "kitap.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_deserialize() {
        let product: Product = serde_json::from_str(r#"{"id": 3, "name": "Deneme"}"#).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.category(), None);
        assert_eq!(product.image, "");
        assert_eq!(product.image_or_placeholder(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn explicit_image_is_kept() {
        let product = Product::new(1, "Fizik", "AYT", "fizik.png");
        assert_eq!(product.image_or_placeholder(), "fizik.png");
    }
}
