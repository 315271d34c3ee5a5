pub mod admin;
pub mod assets;
pub mod generate;
pub mod health;
pub mod marketplace;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                        get, set (mock auth), sign out
/// /session/demo                   sign in as the seeded demo user
/// /session/brand                  set brand profile (onboarding)
///
/// /assets                         occasion catalog (filter: month, language)
/// /assets/{id}                    one occasion asset
/// /assets/{id}/placement          overlay placement + style for the editor
///
/// /marketplace                    list listings, publish (creator/admin)
///
/// /generate/logo                  brand logo (not credit-gated)
/// /generate/image                 marketing creative (1 image credit)
/// /generate/video                 video creative (1 video credit)
/// /generate/copy                  occasion greeting text
/// /generate/history               bounded recent-first generation history
///
/// /admin/status                   store counters (admin only)
/// /admin/assets                   replace occasion catalog (admin only)
/// /admin/credits                  grant credits (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(session::router())
        .merge(assets::router())
        .merge(marketplace::router())
        .merge(generate::router())
        .merge(admin::router())
}
