//! The generative backend abstraction.
//!
//! Handlers program against [`GenerativeBackend`] so the HTTP client can be
//! swapped for a test double (call counting, canned failures) without
//! touching handler code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use brandstudio_core::assets::Language;
use brandstudio_core::prompt::{ImagePromptParams, LogoPromptParams};

use crate::GenAiError;

/// Output resolution of a generated video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoResolution {
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    Hd1080,
}

/// Aspect ratios the video model supports (a subset of the overlay
/// resolver's ratios: no square output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoAspect {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
}

/// Inputs for one video generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    pub prompt: String,
    pub resolution: VideoResolution,
    pub aspect_ratio: VideoAspect,
}

/// One generative operation per call; implementations must not retry
/// internally. All returned media references are ready to use: data URIs for
/// inline images, keyed download URLs for videos.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate a brand logo. Returns a `data:image/png;base64,...` URI.
    async fn generate_logo(&self, params: &LogoPromptParams) -> Result<String, GenAiError>;

    /// Generate a marketing creative. Returns a `data:image/png;base64,...`
    /// URI.
    async fn generate_image(&self, params: &ImagePromptParams) -> Result<String, GenAiError>;

    /// Generate a short occasion greeting. Returns trimmed text.
    async fn generate_occasion_copy(
        &self,
        occasion: &str,
        language: Language,
        year: i32,
    ) -> Result<String, GenAiError>;

    /// Generate a video, polling the long-running operation until it
    /// completes, the deadline expires, or `cancel` fires. Returns a
    /// downloadable URL.
    async fn generate_video(
        &self,
        request: &VideoRequest,
        cancel: CancellationToken,
    ) -> Result<String, GenAiError>;
}
