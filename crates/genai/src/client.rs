//! HTTP implementation of [`GenerativeBackend`] over [`reqwest`].
//!
//! Wraps the hosted generative API: `generateContent` for logos, marketing
//! creatives, and greeting copy; `generateVideos` plus operation polling for
//! video. The poll loop runs at a fixed interval with an overall deadline
//! and a cancellation hook, so a stalled remote operation can never suspend
//! the caller indefinitely.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use brandstudio_core::assets::Language;
use brandstudio_core::prompt::{self, ImagePromptParams, LogoPromptParams};

use crate::backend::{GenerativeBackend, VideoRequest};
use crate::config::GenAiConfig;
use crate::messages::{GenerateContentRequest, GenerateContentResponse, Operation};
use crate::GenAiError;

/// Model used for logo and marketing-creative generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Model used for greeting copy.
pub const TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Model used for video generation.
pub const VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";

/// HTTP client for the generative API.
pub struct GenerativeClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl GenerativeClient {
    /// Create a client for the given endpoint.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across adapters).
    pub fn with_client(client: reqwest::Client, config: GenAiConfig) -> Self {
        Self { client, config }
    }

    /// Submit a text prompt to a `generateContent` model.
    async fn generate_content(
        &self,
        model: &str,
        prompt: String,
    ) -> Result<GenerateContentResponse, GenAiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        );

        let response = self
            .client
            .post(url)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Start a video generation operation.
    async fn start_video(&self, request: &VideoRequest) -> Result<Operation, GenAiError> {
        let url = format!(
            "{}/models/{}:generateVideos?key={}",
            self.config.base_url, VIDEO_MODEL, self.config.api_key
        );

        let body = serde_json::json!({
            "prompt": request.prompt,
            "config": {
                "numberOfVideos": 1,
                "resolution": request.resolution,
                "aspectRatio": request.aspect_ratio,
            },
        });

        let response = self.client.post(url).json(&body).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch the current state of a long-running operation.
    async fn fetch_operation(&self, name: &str) -> Result<Operation, GenAiError> {
        let url = format!(
            "{}/{}?key={}",
            self.config.base_url, name, self.config.api_key
        );

        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure a success status, then deserialize the JSON body. Non-2xx
    /// responses become [`GenAiError::Api`] carrying the status and raw body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerativeBackend for GenerativeClient {
    async fn generate_logo(&self, params: &LogoPromptParams) -> Result<String, GenAiError> {
        let response = self
            .generate_content(IMAGE_MODEL, prompt::logo_prompt(params))
            .await?;

        response
            .first_inline_data_uri()
            .ok_or(GenAiError::MissingMedia("inline image data"))
    }

    async fn generate_image(&self, params: &ImagePromptParams) -> Result<String, GenAiError> {
        let response = self
            .generate_content(IMAGE_MODEL, prompt::image_prompt(params))
            .await?;

        response
            .first_inline_data_uri()
            .ok_or(GenAiError::MissingMedia("inline image data"))
    }

    async fn generate_occasion_copy(
        &self,
        occasion: &str,
        language: Language,
        year: i32,
    ) -> Result<String, GenAiError> {
        let response = self
            .generate_content(
                TEXT_MODEL,
                prompt::occasion_copy_prompt(occasion, language, year),
            )
            .await?;

        // Absent text is an empty greeting, not an error.
        Ok(response.text().unwrap_or_default())
    }

    async fn generate_video(
        &self,
        request: &VideoRequest,
        cancel: CancellationToken,
    ) -> Result<String, GenAiError> {
        let deadline_secs = self.config.poll_deadline.as_secs();
        let first = self.start_video(request).await?;

        tracing::info!(
            operation = first.name.as_deref().unwrap_or("<unnamed>"),
            "Video generation started"
        );

        let done = tokio::time::timeout(self.config.poll_deadline, async {
            let mut operation = first;
            loop {
                if operation.done {
                    return Ok(operation);
                }

                let name = operation
                    .name
                    .clone()
                    .ok_or(GenAiError::MissingMedia("operation name"))?;

                tokio::select! {
                    () = cancel.cancelled() => return Err(GenAiError::Cancelled),
                    () = tokio::time::sleep(self.config.poll_interval) => {}
                }

                operation = self.fetch_operation(&name).await?;
            }
        })
        .await
        .map_err(|_| GenAiError::Timeout(deadline_secs))??;

        let uri = done.video_uri()?;

        // The download URI is signed but still requires the API key appended
        // as a query parameter.
        Ok(format!("{uri}&key={}", self.config.api_key))
    }
}
