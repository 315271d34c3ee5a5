//! Route definitions for the occasion-asset catalog.
//!
//! Mounted at `/assets` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Catalog routes.
///
/// ```text
/// GET /assets                  -> list_assets (filter: month, language)
/// GET /assets/{id}             -> get_asset
/// GET /assets/{id}/placement   -> get_placement (editor overlay geometry)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(assets::list_assets))
        .route("/assets/{id}", get(assets::get_asset))
        .route("/assets/{id}/placement", get(assets::get_placement))
}
