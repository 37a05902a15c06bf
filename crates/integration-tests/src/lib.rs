//! Integration tests for Mini Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mini-store-integration-tests
//! ```
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`.
//! [`TestClient`] carries the session cookie between requests the way a
//! browser would, so a sequence of calls sees one visitor's cart.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use mini_store_core::{Catalog, LoadError};
use mini_store_storefront::app;
use mini_store_storefront::config::StoreConfig;
use mini_store_storefront::state::AppState;
use tower::ServiceExt;

/// Catalog used by the integration tests.
pub const TEST_CATALOG: &str = r#"[
  { "id": 1, "name": "Ceramic Mug", "price": 1200, "category": "Home", "image": "mug.jpg" },
  { "id": 2, "name": "Canvas Tote", "price": 1800, "category": "Accessories", "image": "tote.jpg" },
  { "id": 3, "name": "Wool Beanie", "price": 2400, "category": "Apparel", "image": "beanie.jpg" },
  { "id": 4, "name": "Fountain Pen", "price": 5600, "category": "Stationery", "image": "pen.jpg" }
]"#;

/// Default configuration with static files served from the storefront crate.
#[must_use]
pub fn test_config() -> StoreConfig {
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static");
    StoreConfig::from_vars(|key| match key {
        "MINI_STORE_STATIC_DIR" => Some(static_dir.to_string()),
        _ => None,
    })
    .unwrap_or_else(|e| panic!("test configuration is invalid: {e}"))
}

/// A response with its body read to a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `HX-Trigger` header, if any.
    #[must_use]
    pub fn hx_trigger(&self) -> Option<&str> {
        self.headers
            .get("HX-Trigger")
            .and_then(|value| value.to_str().ok())
    }
}

/// In-process client for one visitor.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// Client for a storefront whose catalog loaded from `json`.
    #[must_use]
    pub fn with_catalog(json: &str) -> Self {
        Self::with_load_result(Catalog::from_json(json))
    }

    /// Client for a storefront whose catalog load ended with `result`.
    #[must_use]
    pub fn with_load_result(result: Result<Catalog, LoadError>) -> Self {
        let state = AppState::new(test_config(), result);
        Self {
            router: app(state),
            cookie: None,
        }
    }

    /// Client for the standard test catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(TEST_CATALOG)
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// Send a form-encoded POST request.
    pub async fn post(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form)).await
    }

    /// Add one unit of a product.
    pub async fn add(&mut self, product_id: i32) -> TestResponse {
        self.post("/cart/add", &format!("product_id={product_id}"))
            .await
    }

    async fn send(&mut self, method: Method, uri: &str, form: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("HX-Request", "true");
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match form {
            Some(form) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap_or_else(|e| panic!("invalid request: {e}"));

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|e| match e {});

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|e| panic!("failed to read body: {e}"));

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Text content of the first element with the given id.
///
/// Only handles the flat `<tag id="...">text</tag>` markup the storefront
/// emits for counters and totals.
#[must_use]
#[allow(clippy::indexing_slicing)]
pub fn element_text<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let marker = format!("id=\"{id}\"");
    let start = html.find(&marker)?;
    let open_end = start + html[start..].find('>')? + 1;
    let close = open_end + html[open_end..].find('<')?;
    Some(html[open_end..close].trim())
}
