//! Route definitions for administration.
//!
//! Mounted at `/admin` by `api_routes()`. All routes require the admin role.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes.
///
/// ```text
/// GET  /admin/status   -> get_status (store counters)
/// POST /admin/assets   -> replace_catalog (seed/replace occasion catalog)
/// POST /admin/credits  -> grant_credits
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/status", get(admin::get_status))
        .route("/admin/assets", post(admin::replace_catalog))
        .route("/admin/credits", post(admin::grant_credits))
}
