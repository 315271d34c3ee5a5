//! Route definitions for AI generation.
//!
//! Mounted at `/generate` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Generation routes.
///
/// ```text
/// POST /generate/logo     -> generate_logo (not credit-gated)
/// POST /generate/image    -> generate_image (1 image credit)
/// POST /generate/video    -> generate_video (1 video credit)
/// POST /generate/copy     -> generate_copy
/// GET  /generate/history  -> get_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate/logo", post(generate::generate_logo))
        .route("/generate/image", post(generate::generate_image))
        .route("/generate/video", post(generate::generate_video))
        .route("/generate/copy", post(generate::generate_copy))
        .route("/generate/history", get(generate::get_history))
}
