//! Checkout route handlers.
//!
//! Checkout completes entirely inside the store: the final totals are shown
//! on a confirmation panel and the cart is emptied.

use axum::{
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use mini_store_core::CartStore;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::{SessionSlot, session};
use crate::routes::CART_UPDATED_TRIGGER;
use crate::routes::home::{ShopMainTemplate, render_main};
use crate::state::AppState;

/// Complete the order (HTMX).
///
/// On an empty cart, responds 409 with the message to show the shopper and
/// leaves both the cart and the panel state untouched. Outside the cart panel
/// a non-empty cart is left alone and the main region is re-rendered as is.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Response> {
    let mut shop_state = session::shop_state(&session).await?;
    let mut cart = CartStore::open(SessionSlot::read(&session).await?);

    let completed = shop_state.checkout(&mut cart).inspect_err(|_| {
        tracing::info!("Checkout attempted with an empty cart");
    })?;
    let Some(totals) = completed else {
        tracing::debug!(?shop_state, "Ignoring checkout outside the cart panel");
        return Ok(render_main(&state, &session, &cart).await?.into_response());
    };

    // The cleared cart is stored before the confirmation state.
    cart.into_slot().flush(&session).await?;
    session::set_shop_state(&session, shop_state).await?;
    let cart = CartStore::open(SessionSlot::read(&session).await?);
    let main = render_main(&state, &session, &cart).await?;

    tracing::info!(
        quantity = totals.quantity,
        total = %totals.price,
        "Checkout complete"
    );
    let total = totals.price.to_string();
    let data = [("total", total.as_str())];
    add_breadcrumb("checkout", "Checkout complete", Some(data.as_slice()));

    Ok((AppendHeaders([("HX-Trigger", CART_UPDATED_TRIGGER)]), main).into_response())
}

/// Leave the confirmation panel and browse again with the current filters (HTMX).
#[instrument(skip(state, session))]
pub async fn start_new_shopping(
    State(state): State<AppState>,
    session: Session,
) -> Result<ShopMainTemplate> {
    let mut shop_state = session::shop_state(&session).await?;
    if shop_state.start_new_shopping() {
        session::set_shop_state(&session, shop_state).await?;
    }

    let cart = CartStore::open(SessionSlot::read(&session).await?);
    render_main(&state, &session, &cart).await
}
