//! The product catalog.
//!
//! Loaded once at startup and never mutated afterwards. The storefront owns
//! the retrieval; this module only knows how to turn the retrieved JSON into
//! products and answer questions about them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::types::{Price, ProductId};

/// A product as published in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: Price,
    pub category: String,
    /// Image file name, relative to the store's image directory.
    pub image: String,
}

/// Immutable list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from already-loaded products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` if the text is not a JSON array of products.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let products: Vec<Product> = serde_json::from_str(text)?;
        Ok(Self::new(products))
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {"id": 1, "name": "Mug", "price": 1200, "category": "Home", "image": "mug.jpg"},
        {"id": 2, "name": "T-Shirt", "price": 2500, "category": "Apparel", "image": "shirt.jpg"},
        {"id": 3, "name": "Candle", "price": 800, "category": "Home", "image": "candle.jpg"},
        {"id": 4, "name": "Poster", "price": 1500, "category": "Decor", "image": "poster.jpg"}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 4);

        let mug = catalog.find(ProductId::new(1)).unwrap();
        assert_eq!(mug.name, "Mug");
        assert_eq!(mug.price, Price::from_minor(1200));
        assert_eq!(mug.image, "mug.jpg");
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"id": 1}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_empty_array() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.categories(), vec!["Home", "Apparel", "Decor"]);
    }

    #[test]
    fn test_find_unknown() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert!(catalog.find(ProductId::new(99)).is_none());
    }
}
