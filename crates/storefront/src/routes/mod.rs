//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Full page (query: search, category, price)
//! GET  /health                 - Health check
//!
//! # Catalog (HTMX fragments)
//! GET  /products               - Filtered product grid
//!
//! # Cart (HTMX fragments)
//! POST /cart/add               - Add one unit (returns badge, triggers store-notice)
//! POST /cart/remove            - Remove a line (returns cart panel, triggers cart-updated)
//! GET  /cart/count             - Cart count badge
//! POST /cart/open              - Show the cart panel (returns main region)
//! POST /cart/close             - Back to the catalog (returns main region)
//!
//! # Checkout (HTMX fragments)
//! POST /checkout               - Complete the order (returns main region, 409 on empty cart)
//! POST /shop/resume            - Start new shopping (returns main region)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// HTMX event fired whenever the cart contents change.
pub const CART_UPDATED_TRIGGER: &str = "cart-updated";

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/products", get(products::grid))
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::checkout))
        .route("/shop/resume", post(checkout::start_new_shopping))
}
