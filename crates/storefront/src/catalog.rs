//! Product catalog retrieval.
//!
//! The catalog is retrieved exactly once, before the server starts accepting
//! requests. A failed retrieval is not retried.

use mini_store_core::{Catalog, LoadError};
use tracing::instrument;

use crate::config::CatalogSource;

/// Retrieve and parse the catalog from `source`.
///
/// # Errors
///
/// Returns `LoadError::Fetch` if the source can't be read and
/// `LoadError::Parse` if its content is not a product list.
#[instrument]
pub async fn load(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let text = match source {
        CatalogSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::Fetch(format!("{}: {e}", path.display())))?,
        CatalogSource::Http(url) => fetch(url.as_str()).await?,
    };

    let catalog = Catalog::from_json(&text)?;
    tracing::info!(
        products = catalog.len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))
}
