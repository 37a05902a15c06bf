//! Product filtering.
//!
//! A product matches when all three predicates hold:
//! - its name contains the search text (case-insensitive)
//! - its category equals the selected one, or the selection is "All"
//! - its price falls inside the selected inclusive bucket, or the selection is "All"

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::types::Price;

/// Option value meaning "no restriction" for the category and price selectors.
pub const ALL: &str = "All";

/// An inclusive price range in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub min: i64,
    pub max: i64,
}

impl PriceBucket {
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `price` lies within `[min, max]`.
    #[must_use]
    pub const fn contains(&self, price: Price) -> bool {
        let minor = price.minor_units();
        minor >= self.min && minor <= self.max
    }

    /// The selector option value for this bucket (e.g., "1000-2499").
    #[must_use]
    pub fn option_value(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }

    /// Human-readable label (e.g., "$10.00 - $24.99").
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            Price::from_minor(self.min),
            Price::from_minor(self.max)
        )
    }
}

/// Error parsing a `min-max` bucket value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price bucket: {0}")]
pub struct ParseBucketError(String);

impl FromStr for PriceBucket {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBucketError(s.to_string());
        let (min, max) = s.split_once('-').ok_or_else(err)?;
        let min = min.trim().parse::<i64>().map_err(|_| err())?;
        let max = max.trim().parse::<i64>().map_err(|_| err())?;
        if min > max {
            return Err(err());
        }
        Ok(Self { min, max })
    }
}

/// The fixed set of price buckets offered by the price selector.
///
/// Non-overlapping, in ascending order.
pub const PRICE_BUCKETS: [PriceBucket; 4] = [
    PriceBucket::new(0, 999),
    PriceBucket::new(1000, 2499),
    PriceBucket::new(2500, 4999),
    PriceBucket::new(5000, 999_999),
];

/// Category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret a category selector value. `"All"` and the empty string mean no restriction.
    #[must_use]
    pub fn from_option(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Price selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceFilter {
    #[default]
    All,
    Bucket(PriceBucket),
}

impl PriceFilter {
    /// Interpret a price selector value.
    ///
    /// Only values naming one of [`PRICE_BUCKETS`] select a bucket; anything
    /// else (including `"All"`) means no restriction.
    #[must_use]
    pub fn from_option(value: &str) -> Self {
        value
            .parse::<PriceBucket>()
            .ok()
            .filter(|bucket| PRICE_BUCKETS.contains(bucket))
            .map_or(Self::All, Self::Bucket)
    }

    #[must_use]
    pub const fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Bucket(bucket) => bucket.contains(product.price),
        }
    }
}

/// The three filter controls, as currently selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategoryFilter,
    pub price: PriceFilter,
}

impl FilterCriteria {
    /// Build criteria from raw selector values.
    #[must_use]
    pub fn from_options(search: &str, category: &str, price: &str) -> Self {
        Self {
            search: search.to_string(),
            category: CategoryFilter::from_option(category),
            price: PriceFilter::from_option(price),
        }
    }

    /// Whether no predicate restricts anything.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.search.is_empty()
            && self.category == CategoryFilter::All
            && self.price == PriceFilter::All
    }

    /// Whether a single product satisfies all three predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let name_matches = self.search.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        name_matches && self.category.matches(product) && self.price.matches(product)
    }
}

/// Products in `catalog` matching `criteria`, in catalog order.
///
/// An empty result is not an error.
#[must_use]
pub fn apply(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Product> {
    catalog
        .products()
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn product(id: i32, name: &str, price: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_minor(price),
            category: category.to_string(),
            image: format!("{id}.jpg"),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "Coffee Mug", 1200, "Home"),
            product(2, "Travel Mug", 2400, "Outdoors"),
            product(3, "Wool Socks", 900, "Apparel"),
            product(4, "Tent", 15_000, "Outdoors"),
            product(5, "Blanket", 2500, "Home"),
        ])
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_wildcard_returns_catalog_unchanged() {
        let catalog = catalog();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_wildcard());
        assert_eq!(apply(&catalog, &criteria), catalog.products().to_vec());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let criteria = FilterCriteria::from_options("MUG", ALL, ALL);
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec![1, 2]);

        let criteria = FilterCriteria::from_options("ol so", ALL, ALL);
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec![3]);
    }

    #[test]
    fn test_category_filter() {
        let criteria = FilterCriteria::from_options("", "Outdoors", ALL);
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec![2, 4]);
    }

    #[test]
    fn test_price_bucket_is_inclusive() {
        let criteria = FilterCriteria::from_options("", ALL, "1000-2499");
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec![1, 2]);

        let criteria = FilterCriteria::from_options("", ALL, "2500-4999");
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec![5]);
    }

    #[test]
    fn test_all_predicates_combined() {
        let criteria = FilterCriteria::from_options("mug", "Outdoors", "1000-2499");
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec![2]);
    }

    #[test]
    fn test_results_satisfy_every_predicate() {
        let catalog = catalog();
        for bucket in PRICE_BUCKETS {
            for category in ["All", "Home", "Outdoors", "Apparel"] {
                for search in ["", "m", "o", "tent"] {
                    let criteria =
                        FilterCriteria::from_options(search, category, &bucket.option_value());
                    let result = apply(&catalog, &criteria);
                    for p in &result {
                        assert!(p.name.to_lowercase().contains(search));
                        assert!(category == "All" || p.category == category);
                        assert!(bucket.contains(p.price));
                    }
                    let expected = catalog
                        .products()
                        .iter()
                        .filter(|p| criteria.matches(p))
                        .count();
                    assert_eq!(result.len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let criteria = FilterCriteria::from_options("kayak", ALL, ALL);
        assert!(apply(&catalog(), &criteria).is_empty());
    }

    #[test]
    fn test_price_option_outside_fixed_set_means_all() {
        assert_eq!(PriceFilter::from_option("All"), PriceFilter::All);
        assert_eq!(PriceFilter::from_option("1-2"), PriceFilter::All);
        assert_eq!(PriceFilter::from_option("cheap"), PriceFilter::All);
        assert_eq!(
            PriceFilter::from_option("0-999"),
            PriceFilter::Bucket(PriceBucket::new(0, 999))
        );
    }

    #[test]
    fn test_category_option_all_or_empty() {
        assert_eq!(CategoryFilter::from_option("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_option(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_option("Home"),
            CategoryFilter::Only("Home".to_string())
        );
    }

    #[test]
    fn test_bucket_parse() {
        assert_eq!(
            "1000-2499".parse::<PriceBucket>().unwrap(),
            PriceBucket::new(1000, 2499)
        );
        assert!("2499-1000".parse::<PriceBucket>().is_err());
        assert!("1000".parse::<PriceBucket>().is_err());
        assert!("a-b".parse::<PriceBucket>().is_err());
    }

    #[test]
    fn test_buckets_do_not_overlap() {
        for pair in PRICE_BUCKETS.windows(2) {
            if let [lower, upper] = pair {
                assert!(lower.max < upper.min);
            }
        }
    }

    #[test]
    fn test_bucket_label() {
        assert_eq!(PriceBucket::new(1000, 2499).label(), "$10.00 - $24.99");
    }
}
