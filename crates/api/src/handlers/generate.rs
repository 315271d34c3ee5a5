//! Handlers for AI generation.
//!
//! Image and video generations are credit-gated with reserve-then-commit
//! semantics: a credit is atomically reserved before the backend is invoked
//! (so an insufficient balance never reaches the generative API), and
//! refunded if the call fails. Successful generations are recorded in the
//! user's bounded history. Logo generation happens during onboarding and is
//! not gated or recorded; greeting copy consumes no credits either.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use brandstudio_core::assets::Language;
use brandstudio_core::brand::{BrandConfig, IconStyle, Personality};
use brandstudio_core::error::CoreError;
use brandstudio_core::prompt::{ImagePromptParams, LogoPromptParams};
use brandstudio_core::user::{Credits, GeneratedAsset, GeneratedKind, User};
use brandstudio_genai::VideoRequest;

use crate::error::{AppError, AppResult};
use crate::handlers::current_user;
use crate::response::DataResponse;
use crate::state::AppState;

/// A successful generation: the recorded asset plus the remaining balance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub asset: GeneratedAsset,
    pub credits: Credits,
}

// ---------------------------------------------------------------------------
// POST /generate/logo
// ---------------------------------------------------------------------------

/// Logo generation inputs. Everything except the icon style comes from the
/// configured brand profile.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLogoRequest {
    pub icon_style: IconStyle,
}

/// Logo result: a `data:image/png;base64,...` URI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoResponse {
    pub logo_url: String,
}

/// Generate a brand logo from the configured profile.
pub async fn generate_logo(
    State(state): State<AppState>,
    Json(input): Json<GenerateLogoRequest>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&state)?;
    let brand = require_brand(&user)?;

    let params = LogoPromptParams {
        company_name: Some(brand.company_name.clone()),
        industry: brand.industry.clone(),
        audience: brand
            .target_audience
            .clone()
            .unwrap_or_else(|| "General Public".to_string()),
        personality: brand
            .personality
            .unwrap_or(Personality::ProfessionalCorporate),
        colors: brand.brand_colors.clone(),
        icon_style: input.icon_style,
        font_style: brand.font_style,
    };

    let logo_url = state.genai.generate_logo(&params).await?;

    tracing::info!(user_id = %user.id, "Logo generated");

    Ok(Json(DataResponse {
        data: LogoResponse { logo_url },
    }))
}

// ---------------------------------------------------------------------------
// POST /generate/image
// ---------------------------------------------------------------------------

/// Marketing-creative generation inputs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    /// Free-text subject.
    pub prompt: String,
    /// Artistic style, spliced into the prompt verbatim.
    pub style: String,
}

/// Generate a marketing creative (consumes 1 image credit).
pub async fn generate_image(
    State(state): State<AppState>,
    Json(input): Json<GenerateImageRequest>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&state)?;
    reserve_credit(&state, GeneratedKind::Image)?;

    let brand = user.brand.as_ref();
    let params = ImagePromptParams {
        user_prompt: input.prompt.clone(),
        style: input.style,
        brand_industry: brand.map(|b| b.industry.clone()),
        target_audience: brand.and_then(|b| b.target_audience.clone()),
        brand_personality: brand.and_then(|b| b.personality),
        brand_colors: brand.map(|b| b.brand_colors.clone()).unwrap_or_default(),
    };

    let url = match state.genai.generate_image(&params).await {
        Ok(url) => url,
        Err(err) => {
            state.store.refund_credit(GeneratedKind::Image);
            return Err(err.into());
        }
    };

    Ok(Json(DataResponse {
        data: commit_generation(&state, &user, GeneratedKind::Image, url, input.prompt),
    }))
}

// ---------------------------------------------------------------------------
// POST /generate/video
// ---------------------------------------------------------------------------

/// Generate a video creative (consumes 1 video credit).
///
/// The backend polls the remote operation with a deadline, so this request
/// suspends for the duration of the generation but never indefinitely. The
/// poll also aborts (and the credit is refunded) when the server begins
/// graceful shutdown.
pub async fn generate_video(
    State(state): State<AppState>,
    Json(input): Json<VideoRequest>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&state)?;
    reserve_credit(&state, GeneratedKind::Video)?;

    let url = match state
        .genai
        .generate_video(&input, state.shutdown.child_token())
        .await
    {
        Ok(url) => url,
        Err(err) => {
            state.store.refund_credit(GeneratedKind::Video);
            return Err(err.into());
        }
    };

    Ok(Json(DataResponse {
        data: commit_generation(&state, &user, GeneratedKind::Video, url, input.prompt),
    }))
}

// ---------------------------------------------------------------------------
// POST /generate/copy
// ---------------------------------------------------------------------------

/// Occasion-greeting inputs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCopyRequest {
    pub occasion: String,
    pub language: Language,
    /// Defaults to the current year.
    pub year: Option<i32>,
}

/// Greeting result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResponse {
    pub text: String,
}

/// Generate a short occasion greeting (no credit cost).
pub async fn generate_copy(
    State(state): State<AppState>,
    Json(input): Json<GenerateCopyRequest>,
) -> AppResult<impl IntoResponse> {
    current_user(&state)?;

    let year = input.year.unwrap_or_else(|| {
        use chrono::Datelike;
        chrono::Utc::now().year()
    });

    let text = state
        .genai
        .generate_occasion_copy(&input.occasion, input.language, year)
        .await?;

    Ok(Json(DataResponse {
        data: CopyResponse { text },
    }))
}

// ---------------------------------------------------------------------------
// GET /generate/history
// ---------------------------------------------------------------------------

/// The signed-in user's bounded recent-first generation history.
pub async fn get_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = current_user(&state)?;
    Ok(Json(DataResponse {
        data: user.generation_history,
    }))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn require_brand(user: &User) -> Result<&BrandConfig, AppError> {
    user.brand.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Brand profile not configured".to_string(),
        ))
    })
}

/// Atomically reserve one credit of `kind`, or fail with 402 before any
/// backend call is made.
fn reserve_credit(state: &AppState, kind: GeneratedKind) -> Result<(), AppError> {
    if state.store.try_reserve_credit(kind) {
        return Ok(());
    }

    let label = match kind {
        GeneratedKind::Image => "image",
        GeneratedKind::Video => "video",
    };
    Err(AppError::Core(CoreError::InsufficientCredits(format!(
        "No {label} credits remaining"
    ))))
}

/// Record a successful generation in the history and report the remaining
/// balance.
fn commit_generation(
    state: &AppState,
    user: &User,
    kind: GeneratedKind,
    url: String,
    prompt: String,
) -> GenerationResponse {
    let asset = GeneratedAsset {
        id: uuid::Uuid::new_v4(),
        url,
        prompt,
        timestamp: chrono::Utc::now(),
        kind,
    };
    state.store.add_to_history(asset.clone());

    tracing::info!(
        user_id = %user.id,
        kind = ?kind,
        asset_id = %asset.id,
        "Generation recorded"
    );

    let credits = state.store.credits().unwrap_or(Credits {
        images: 0,
        videos: 0,
    });

    GenerationResponse { asset, credits }
}
