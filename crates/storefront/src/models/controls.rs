//! Filter control values.
//!
//! These are the raw values of the search box and the two selectors, exactly
//! as the browser submits them. They are kept in the session so a re-rendered
//! page shows the same selections, and turned into [`FilterCriteria`] on
//! every filter event.

use mini_store_core::FilterCriteria;
use mini_store_core::filter::ALL;
use serde::{Deserialize, Serialize};

/// Current values of the search box, category selector and price selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControls {
    #[serde(default)]
    pub search: String,
    #[serde(default = "all")]
    pub category: String,
    #[serde(default = "all")]
    pub price: String,
}

fn all() -> String {
    ALL.to_string()
}

impl Default for FilterControls {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: all(),
            price: all(),
        }
    }
}

impl FilterControls {
    /// Criteria the filter engine applies for these control values.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_options(&self.search, &self.category, &self.price)
    }
}

/// Query parameters of a filter event; absent parameters keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
}

impl FilterQuery {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.price.is_none()
    }

    /// Overlay the submitted values onto `controls`.
    #[must_use]
    pub fn apply_to(self, controls: FilterControls) -> FilterControls {
        FilterControls {
            search: self.search.unwrap_or(controls.search),
            category: self.category.unwrap_or(controls.category),
            price: self.price.unwrap_or(controls.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use mini_store_core::{CategoryFilter, PriceFilter};

    use super::*;

    #[test]
    fn test_default_controls_are_wildcard() {
        assert!(FilterControls::default().criteria().is_wildcard());
    }

    #[test]
    fn test_query_overlays_only_submitted_values() {
        let controls = FilterControls {
            search: "mug".to_string(),
            category: "Home".to_string(),
            price: "0-999".to_string(),
        };
        let query = FilterQuery {
            category: Some("All".to_string()),
            ..FilterQuery::default()
        };

        let updated = query.apply_to(controls);
        assert_eq!(updated.search, "mug");
        assert_eq!(updated.category, "All");
        assert_eq!(updated.price, "0-999");

        let criteria = updated.criteria();
        assert_eq!(criteria.category, CategoryFilter::All);
        assert!(matches!(criteria.price, PriceFilter::Bucket(_)));
    }
}
