//! Application state shared across handlers.

use std::sync::Arc;

use mini_store_core::{Catalog, LoadError};

use crate::config::StoreConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog inside is
/// immutable for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StoreConfig,
    catalog: Catalog,
    catalog_available: bool,
}

impl AppState {
    /// Create a new application state from the outcome of the catalog load.
    ///
    /// A failed load leaves the catalog empty and marks it unavailable; the
    /// product grid then shows a static error message.
    #[must_use]
    pub fn new(config: StoreConfig, catalog: Result<Catalog, LoadError>) -> Self {
        let (catalog, catalog_available) = match catalog {
            Ok(catalog) => (catalog, true),
            Err(e) => {
                tracing::error!(error = %e, "Could not load product data");
                (Catalog::default(), false)
            }
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                catalog_available,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Whether the catalog loaded successfully at startup.
    #[must_use]
    pub fn catalog_available(&self) -> bool {
        self.inner.catalog_available
    }
}
