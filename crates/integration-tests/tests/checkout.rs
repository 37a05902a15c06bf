//! Checkout flow: confirmation, empty-cart refusal, and starting over.

use axum::http::StatusCode;
use mini_store_integration_tests::{TestClient, element_text};

const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Please add items before checking out.";

#[tokio::test]
async fn test_checkout_with_empty_cart_is_refused() {
    let mut client = TestClient::new();

    let response = client.post("/checkout", "").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body, EMPTY_CART_MESSAGE);

    // Still browsing: the page shows the catalog, not a confirmation.
    let page = client.get("/").await;
    assert!(page.body.contains("id=\"product-grid\""));
    assert!(!page.body.contains("id=\"checkout-success\""));
}

#[tokio::test]
async fn test_empty_cart_refusal_keeps_cart_panel_open() {
    let mut client = TestClient::new();
    client.post("/cart/open", "").await;

    let response = client.post("/checkout", "").await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let page = client.get("/").await;
    assert!(page.body.contains("id=\"cart-summary\""));
}

#[tokio::test]
async fn test_checkout_shows_totals_and_clears_cart() {
    let mut client = TestClient::new();
    client.add(1).await;
    client.add(3).await;
    client.post("/cart/open", "").await;

    let confirmation = client.post("/checkout", "").await;
    assert_eq!(confirmation.status, StatusCode::OK);
    assert_eq!(confirmation.hx_trigger(), Some("cart-updated"));
    assert!(confirmation.body.contains("id=\"checkout-success\""));
    assert_eq!(element_text(&confirmation.body, "final-count"), Some("2"));
    assert_eq!(element_text(&confirmation.body, "final-price"), Some("36.00"));

    let count = client.get("/cart/count").await;
    assert_eq!(element_text(&count.body, "cart-count"), Some("0"));

    // A second checkout finds nothing to buy.
    let again = client.post("/checkout", "").await;
    assert_eq!(again.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_checkout_while_browsing_changes_nothing() {
    let mut client = TestClient::new();
    client.add(1).await;

    let main = client.post("/checkout", "").await;
    assert_eq!(main.status, StatusCode::OK);
    assert!(main.hx_trigger().is_none());
    assert!(main.body.contains("id=\"product-grid\""));
    assert!(!main.body.contains("id=\"checkout-success\""));

    let count = client.get("/cart/count").await;
    assert_eq!(element_text(&count.body, "cart-count"), Some("1"));
}

#[tokio::test]
async fn test_checkout_from_confirmation_is_ignored() {
    let mut client = TestClient::new();
    client.add(1).await;
    client.post("/cart/open", "").await;
    client.post("/checkout", "").await;
    client.add(2).await;

    // Still on the confirmation panel: the new item stays in the cart.
    let main = client.post("/checkout", "").await;
    assert_eq!(main.status, StatusCode::OK);
    assert_eq!(element_text(&main.body, "final-price"), Some("12.00"));

    let count = client.get("/cart/count").await;
    assert_eq!(element_text(&count.body, "cart-count"), Some("1"));
}

#[tokio::test]
async fn test_confirmation_survives_page_reload() {
    let mut client = TestClient::new();
    client.add(2).await;
    client.post("/cart/open", "").await;
    client.post("/checkout", "").await;

    let page = client.get("/").await;
    assert!(page.body.contains("id=\"checkout-success\""));
    assert_eq!(element_text(&page.body, "final-price"), Some("18.00"));
}

#[tokio::test]
async fn test_start_new_shopping_restores_catalog() {
    let mut client = TestClient::new();
    client.get("/products?category=Apparel").await;
    client.add(3).await;
    client.post("/cart/open", "").await;
    client.post("/checkout", "").await;

    let main = client.post("/shop/resume", "").await;
    assert_eq!(main.status, StatusCode::OK);
    assert!(!main.body.contains("id=\"checkout-success\""));
    assert!(main.body.contains("id=\"product-grid\""));

    // Filters in force before checkout still apply.
    assert!(main.body.contains("Wool Beanie"));
    assert!(!main.body.contains("Ceramic Mug"));
}
