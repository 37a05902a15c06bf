//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart snapshot is read from the session at the start of each handler
//! and written back after the mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use mini_store_core::{CartStore, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::{SessionSlot, session};
use crate::routes::CART_UPDATED_TRIGGER;
use crate::routes::home::{ShopMainTemplate, render_main};
use crate::state::AppState;
use crate::views::CartView;

/// HTMX trigger acknowledging a successful add.
pub const ADDED_TRIGGER: &str = r#"{"store-notice":"Added to cart!"}"#;

/// Add / remove form data.
///
/// The id is kept as submitted; values that don't parse are ignored like
/// unknown ids.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub product_id: String,
}

impl ProductForm {
    fn product_id(&self) -> Option<ProductId> {
        self.product_id.parse().ok()
    }
}

/// Cart panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the updated count badge. A successful add also triggers the
/// shopper-visible acknowledgment; unknown ids change nothing.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let mut cart = CartStore::open(SessionSlot::read(&session).await?);

    let added = match form.product_id() {
        Some(id) => cart
            .add_item(state.catalog(), id)
            .map(|line| (line.id(), line.quantity)),
        None => None,
    };

    let count = cart.totals().quantity;
    let Some((id, quantity)) = added else {
        tracing::debug!(product_id = %form.product_id, "Ignoring add of unknown product");
        return Ok(CartCountTemplate { count }.into_response());
    };

    cart.into_slot().flush(&session).await?;
    tracing::info!(product_id = %id, quantity, "Added to cart");
    let id_str = id.to_string();
    let data = [("product_id", id_str.as_str())];
    add_breadcrumb("cart", "Added to cart", Some(data.as_slice()));

    Ok((
        AppendHeaders([("HX-Trigger", ADDED_TRIGGER)]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Remove a product's whole line from the cart (HTMX).
///
/// Returns the re-rendered cart panel.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<ProductForm>) -> Result<Response> {
    let mut cart = CartStore::open(SessionSlot::read(&session).await?);

    let Some(id) = form.product_id() else {
        tracing::debug!(product_id = %form.product_id, "Ignoring remove of malformed id");
        return Ok(CartPanelTemplate {
            cart: CartView::from(&cart),
        }
        .into_response());
    };

    let removed = cart.remove_item(id);
    let view = CartView::from(&cart);
    cart.into_slot().flush(&session).await?;
    tracing::info!(product_id = %id, removed, "Removed from cart");

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_TRIGGER)]),
        CartPanelTemplate { cart: view },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = CartStore::open(SessionSlot::read(&session).await?);
    Ok(CartCountTemplate {
        count: cart.totals().quantity,
    })
}

/// Show the cart panel in place of the catalog (HTMX).
#[instrument(skip(state, session))]
pub async fn open(State(state): State<AppState>, session: Session) -> Result<ShopMainTemplate> {
    let mut shop_state = session::shop_state(&session).await?;
    if shop_state.open_cart() {
        session::set_shop_state(&session, shop_state).await?;
    }

    let cart = CartStore::open(SessionSlot::read(&session).await?);
    render_main(&state, &session, &cart).await
}

/// Close the cart panel and show the catalog again (HTMX).
#[instrument(skip(state, session))]
pub async fn close(State(state): State<AppState>, session: Session) -> Result<ShopMainTemplate> {
    let mut shop_state = session::shop_state(&session).await?;
    if shop_state.close_cart() {
        session::set_shop_state(&session, shop_state).await?;
    }

    let cart = CartStore::open(SessionSlot::read(&session).await?);
    render_main(&state, &session, &cart).await
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_product_form_parses_id() {
        let form = ProductForm {
            product_id: "12".to_string(),
        };
        assert_eq!(form.product_id(), Some(ProductId::new(12)));
    }

    #[test]
    fn test_product_form_malformed_id() {
        for raw in ["", "abc", "1.5", "NaN"] {
            let form = ProductForm {
                product_id: raw.to_string(),
            };
            assert!(form.product_id().is_none(), "{raw} should not parse");
        }
    }

    #[test]
    fn test_added_trigger_is_json() {
        let value: serde_json::Value = serde_json::from_str(ADDED_TRIGGER).unwrap_or_default();
        assert_eq!(value["store-notice"], "Added to cart!");
    }
}
