//! Route definitions for the mock session.
//!
//! Mounted at `/session` by `api_routes()`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Session routes.
///
/// ```text
/// GET    /session        -> get_session
/// PUT    /session        -> set_session (sign in as the supplied user)
/// POST   /session/demo   -> demo_session (sign in as the seeded demo user)
/// DELETE /session        -> clear_session
/// PUT    /session/brand  -> set_brand (onboarding)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/session",
            get(session::get_session)
                .put(session::set_session)
                .delete(session::clear_session),
        )
        .route("/session/demo", post(session::demo_session))
        .route("/session/brand", put(session::set_brand))
}
