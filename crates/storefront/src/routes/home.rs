//! Full page and main-region rendering.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use mini_store_core::{CartStore, KeyValueSlot};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::controls::FilterQuery;
use crate::models::{FilterControls, SessionSlot, session};
use crate::state::AppState;
use crate::views::{CartView, ControlsView, GridView, ReceiptView, ShopView};

/// Full storefront page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub count: u32,
    pub controls: ControlsView,
    pub grid: GridView,
    pub cart_panel: Option<CartView>,
    pub receipt_panel: Option<ReceiptView>,
}

/// Main region fragment (for HTMX panel switches).
#[derive(Template, WebTemplate)]
#[template(path = "partials/shop_main.html")]
pub struct ShopMainTemplate {
    pub controls: ControlsView,
    pub grid: GridView,
    pub cart_panel: Option<CartView>,
    pub receipt_panel: Option<ReceiptView>,
}

impl From<ShopView> for ShopMainTemplate {
    fn from(view: ShopView) -> Self {
        Self {
            controls: view.controls,
            grid: view.grid,
            cart_panel: view.cart_panel,
            receipt_panel: view.receipt_panel,
        }
    }
}

/// Display the storefront.
///
/// Query parameters, when present, update the filter controls first; this is
/// also the no-script fallback for submitting the filter form.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FilterQuery>,
) -> Result<IndexTemplate> {
    let controls = update_controls(&session, query).await?;
    let shop_state = session::shop_state(&session).await?;
    let cart = CartStore::open(SessionSlot::read(&session).await?);

    let view = ShopView::build(&state, shop_state, &controls, &cart);
    Ok(IndexTemplate {
        count: cart.totals().quantity,
        controls: view.controls,
        grid: view.grid,
        cart_panel: view.cart_panel,
        receipt_panel: view.receipt_panel,
    })
}

/// Render the main region for the session's current panel state.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn render_main<S: KeyValueSlot>(
    state: &AppState,
    session: &Session,
    cart: &CartStore<S>,
) -> Result<ShopMainTemplate> {
    let shop_state = session::shop_state(session).await?;
    let controls = session::filter_controls(session).await?;
    Ok(ShopView::build(state, shop_state, &controls, cart).into())
}

/// Overlay a filter event onto the stored controls and store the result.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn update_controls(session: &Session, query: FilterQuery) -> Result<FilterControls> {
    let current = session::filter_controls(session).await?;
    if query.is_empty() {
        return Ok(current);
    }

    let controls = query.apply_to(current);
    session::set_filter_controls(session, &controls).await?;
    Ok(controls)
}
