//! Handlers for administration. Every route here requires the admin role.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use brandstudio_core::assets::{validate_asset, OccasionAsset};
use brandstudio_core::error::CoreError;
use brandstudio_core::user::{Credits, GeneratedKind, UserRole};

use crate::error::{AppError, AppResult};
use crate::handlers::require_role;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /admin/status
// ---------------------------------------------------------------------------

/// Store counters for the admin dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatus {
    pub session_active: bool,
    pub catalog_assets: usize,
    pub marketplace_listings: usize,
    pub history_entries: usize,
    pub credits: Option<Credits>,
}

/// Current store counters.
pub async fn get_status(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    require_role(&state, &[UserRole::Admin])?;

    let user = state.store.user();
    let status = AdminStatus {
        session_active: user.is_some(),
        catalog_assets: state.store.assets().len(),
        marketplace_listings: state.store.marketplace().len(),
        history_entries: user.map(|u| u.generation_history.len()).unwrap_or(0),
        credits: state.store.credits(),
    };

    Ok(Json(DataResponse { data: status }))
}

// ---------------------------------------------------------------------------
// POST /admin/assets
// ---------------------------------------------------------------------------

/// Catalog replacement summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReplaced {
    pub count: usize,
}

/// Replace the occasion catalog wholesale. Every entry is validated before
/// anything is written, so a bad payload leaves the catalog untouched.
pub async fn replace_catalog(
    State(state): State<AppState>,
    Json(assets): Json<Vec<OccasionAsset>>,
) -> AppResult<impl IntoResponse> {
    require_role(&state, &[UserRole::Admin])?;

    for asset in &assets {
        validate_asset(asset)?;
    }

    let count = assets.len();
    state.store.set_assets(assets);

    tracing::info!(count, "Occasion catalog replaced");

    Ok(Json(DataResponse {
        data: CatalogReplaced { count },
    }))
}

// ---------------------------------------------------------------------------
// POST /admin/credits
// ---------------------------------------------------------------------------

/// A credit grant for the signed-in user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantCreditsRequest {
    pub kind: GeneratedKind,
    pub amount: u32,
}

/// Grant credits to the signed-in user and report the new balance.
pub async fn grant_credits(
    State(state): State<AppState>,
    Json(input): Json<GrantCreditsRequest>,
) -> AppResult<impl IntoResponse> {
    require_role(&state, &[UserRole::Admin])?;

    if input.amount == 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Credit amount must be positive".to_string(),
        )));
    }

    state
        .store
        .update_credits(input.kind, i64::from(input.amount));

    let credits = state.store.credits().ok_or_else(|| {
        AppError::Core(CoreError::Internal("Session vanished mid-grant".to_string()))
    })?;

    tracing::info!(kind = ?input.kind, amount = input.amount, "Credits granted");

    Ok(Json(DataResponse { data: credits }))
}
