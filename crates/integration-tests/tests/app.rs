//! Router plumbing: health check, static files, and response headers.

use axum::http::StatusCode;
use mini_store_integration_tests::TestClient;
use mini_store_storefront::middleware::session::{SESSION_COOKIE_NAME, SESSION_EXPIRY_SECONDS};

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();

    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let mut client = TestClient::new();

    let script = client.get("/static/app.js").await;
    assert_eq!(script.status, StatusCode::OK);
    assert!(script.body.contains("store-notice"));

    let catalog = client.get("/static/products.json").await;
    assert_eq!(catalog.status, StatusCode::OK);
}

#[tokio::test]
async fn test_security_and_request_id_headers() {
    let mut client = TestClient::new();

    let response = client.get("/").await;
    assert_eq!(
        response
            .headers
            .get("x-frame-options")
            .and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    assert!(response.headers.contains_key("content-security-policy"));
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let mut client = TestClient::new();

    let response = client.get("/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_cookie_expires_after_a_day_of_inactivity() {
    let mut client = TestClient::new();

    let response = client.add(1).await;
    let cookie = response
        .headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE_NAME}=")));
    assert!(cookie.contains(&format!("Max-Age={SESSION_EXPIRY_SECONDS}")));
}

#[tokio::test]
async fn test_page_disables_htmx_indicator_styles() {
    let mut client = TestClient::new();

    let page = client.get("/").await;
    assert!(page.body.contains(r#"name="htmx-config""#));
    assert!(page.body.contains(r#""includeIndicatorStyles": false"#));

    let csp = page
        .headers
        .get("content-security-policy")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(csp.contains("style-src 'self'"));
}
