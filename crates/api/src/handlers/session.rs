//! Handlers for the mock session.
//!
//! Authentication is deliberately mocked: the client supplies its user
//! record wholesale and the store keeps exactly one. The brand profile set
//! here is the routing gate between onboarding and the dashboard -- a user
//! without a brand is sent to onboarding by the client.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use brandstudio_core::brand::{validate_brand_config, BrandConfig, FontStyle};
use brandstudio_core::user::{Credits, User, UserRole};

use crate::error::AppResult;
use crate::handlers::current_user;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /session
// ---------------------------------------------------------------------------

/// Current session user, `data: null` when signed out.
pub async fn get_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.store.user(),
    }))
}

// ---------------------------------------------------------------------------
// PUT /session
// ---------------------------------------------------------------------------

/// Replace the session user (mock sign-in).
pub async fn set_session(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(user_id = %user.id, role = ?user.role, "Session user set");
    state.store.set_user(Some(user.clone()));

    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// POST /session/demo
// ---------------------------------------------------------------------------

/// Sign in as the seeded demo user: an already-onboarded business account
/// with a starter credit balance.
pub async fn demo_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = demo_user();
    tracing::info!(user_id = %user.id, "Demo session started");
    state.store.set_user(Some(user.clone()));

    Ok(Json(DataResponse { data: user }))
}

fn demo_user() -> User {
    User {
        id: "user_123".to_string(),
        name: "John Business".to_string(),
        email: "john@business.com".to_string(),
        role: UserRole::User,
        brand: Some(BrandConfig {
            company_name: "Sunshine Bakery".to_string(),
            logo_url: None,
            website: None,
            tagline: None,
            contact_number: None,
            brand_colors: vec!["#f59e0b".to_string(), "#fbbf24".to_string()],
            font_style: FontStyle::Playful,
            industry: "Food & Beverage".to_string(),
            personality: None,
            target_audience: None,
        }),
        credits: Credits {
            images: 3,
            videos: 3,
        },
        generation_history: vec![],
    }
}

// ---------------------------------------------------------------------------
// DELETE /session
// ---------------------------------------------------------------------------

/// Sign out.
pub async fn clear_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.store.set_user(None);
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// PUT /session/brand
// ---------------------------------------------------------------------------

/// Set the signed-in user's brand profile (the onboarding submit).
pub async fn set_brand(
    State(state): State<AppState>,
    Json(brand): Json<BrandConfig>,
) -> AppResult<impl IntoResponse> {
    let mut user = current_user(&state)?;

    validate_brand_config(&brand)?;

    user.brand = Some(brand);
    state.store.set_user(Some(user.clone()));

    tracing::info!(user_id = %user.id, "Brand profile configured");

    Ok(Json(DataResponse { data: user }))
}
