//! Product grid route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::controls::FilterQuery;
use crate::routes::home::update_controls;
use crate::state::AppState;
use crate::views::GridView;

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub grid: GridView,
}

/// Re-filter the catalog after a search box or selector change.
#[instrument(skip(state, session))]
pub async fn grid(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FilterQuery>,
) -> Result<ProductGridTemplate> {
    let controls = update_controls(&session, query).await?;
    let grid = GridView::build(&state, &controls);
    tracing::debug!(matches = grid.products.len(), "Filters applied");

    Ok(ProductGridTemplate { grid })
}
