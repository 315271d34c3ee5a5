//! Route definitions for the creator marketplace.
//!
//! Mounted at `/marketplace` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::marketplace;
use crate::state::AppState;

/// Marketplace routes.
///
/// ```text
/// GET  /marketplace  -> list_marketplace
/// POST /marketplace  -> publish_listing (creator or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/marketplace",
        get(marketplace::list_marketplace).post(marketplace::publish_listing),
    )
}
