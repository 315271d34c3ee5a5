//! Handlers for the occasion-asset catalog and the editor's overlay geometry.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use brandstudio_core::assets::{self, Language, OccasionAsset};
use brandstudio_core::error::CoreError;
use brandstudio_core::placement::{self, AspectRatio, OverlayStyle, Placement};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /assets
// ---------------------------------------------------------------------------

/// Catalog filter parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogFilter {
    /// 0-based calendar month.
    pub month: Option<u8>,
    pub language: Option<Language>,
}

/// List the occasion catalog, optionally filtered by month and language.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilter>,
) -> AppResult<impl IntoResponse> {
    if let Some(month) = filter.month {
        assets::validate_month(month)?;
    }

    let list: Vec<OccasionAsset> = state
        .store
        .assets()
        .into_iter()
        .filter(|a| filter.month.is_none_or(|m| a.month == m))
        .filter(|a| filter.language.is_none_or(|l| a.language == l))
        .collect();

    Ok(Json(DataResponse { data: list }))
}

// ---------------------------------------------------------------------------
// GET /assets/{id}
// ---------------------------------------------------------------------------

/// One occasion asset by id.
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = find_asset(&state, &id)?;
    Ok(Json(DataResponse { data: asset }))
}

// ---------------------------------------------------------------------------
// GET /assets/{id}/placement
// ---------------------------------------------------------------------------

/// Placement query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlacementQuery {
    /// Presentation ratio, e.g. `16:9`. Unknown values degrade to `1:1`.
    pub aspect_ratio: Option<String>,
    /// Whether the bottom region carries content the overlay must not cover.
    #[serde(default)]
    pub avoid_bottom: bool,
}

/// Overlay geometry for the asset editor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResponse {
    pub asset_id: String,
    pub aspect_ratio: AspectRatio,
    pub placement: Placement,
    pub style: OverlayStyle,
}

/// Resolve the brand-overlay placement for an asset.
///
/// The asset must exist; the ratio itself can never fail to resolve.
pub async fn get_placement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PlacementQuery>,
) -> AppResult<impl IntoResponse> {
    let asset = find_asset(&state, &id)?;

    let ratio = AspectRatio::parse_or_square(query.aspect_ratio.as_deref().unwrap_or("1:1"));
    let resolved = placement::resolve(ratio, query.avoid_bottom);

    Ok(Json(DataResponse {
        data: PlacementResponse {
            asset_id: asset.id,
            aspect_ratio: ratio,
            placement: resolved,
            style: OverlayStyle::from(resolved),
        },
    }))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn find_asset(state: &AppState, id: &str) -> Result<OccasionAsset, AppError> {
    state.store.asset(id).ok_or(AppError::Core(CoreError::NotFound {
        entity: "OccasionAsset",
        id: id.to_string(),
    }))
}
