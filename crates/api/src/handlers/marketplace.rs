//! Handlers for the creator marketplace.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use brandstudio_core::assets::{validate_listing, MarketplaceAsset, OccasionAsset};
use brandstudio_core::user::UserRole;

use crate::error::AppResult;
use crate::handlers::require_role;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /marketplace
// ---------------------------------------------------------------------------

/// List all marketplace listings.
pub async fn list_marketplace(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.store.marketplace(),
    }))
}

// ---------------------------------------------------------------------------
// POST /marketplace
// ---------------------------------------------------------------------------

/// A listing as submitted by a creator. The creator id comes from the
/// session, never from the payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishListingRequest {
    #[serde(flatten)]
    pub asset: OccasionAsset,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Publish an asset to the marketplace (creator or admin role).
pub async fn publish_listing(
    State(state): State<AppState>,
    Json(input): Json<PublishListingRequest>,
) -> AppResult<impl IntoResponse> {
    let user = require_role(&state, &[UserRole::Creator, UserRole::Admin])?;

    let listing = MarketplaceAsset {
        asset: input.asset,
        creator_id: user.id.clone(),
        price: input.price,
        tags: input.tags,
    };
    validate_listing(&listing)?;

    state.store.push_listing(listing.clone());

    tracing::info!(
        creator_id = %user.id,
        asset_id = %listing.asset.id,
        "Marketplace listing published"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: listing })))
}
