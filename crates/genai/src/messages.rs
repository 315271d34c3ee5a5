//! Wire-shape types for the generative API.
//!
//! Only the fields this system reads are modeled; everything else in the
//! provider's responses is ignored during deserialization. The extraction
//! helpers encode the two response contracts: image responses must carry at
//! least one inline base64 payload (re-encoded as a data URI), and completed
//! video operations must carry a downloadable URI.

use serde::{Deserialize, Serialize};

use crate::GenAiError;

// ---------------------------------------------------------------------------
// generateContent
// ---------------------------------------------------------------------------

/// Request body for a `generateContent` call.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: ContentParts,
}

impl GenerateContentRequest {
    /// Wrap a single text prompt in the request envelope.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: ContentParts {
                parts: vec![Part {
                    text: Some(prompt.into()),
                    inline_data: None,
                }],
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentParts {
    pub parts: Vec<Part>,
}

/// One part of a content block: text, inline media, or both absent.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        rename = "inlineData",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded inline media payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Response body of a `generateContent` call.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: ContentParts,
}

impl GenerateContentResponse {
    /// First inline media payload of the first candidate, re-encoded as a
    /// `data:image/png;base64,...` URI.
    pub fn first_inline_data_uri(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        candidate
            .content
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .map(|inline| format!("data:image/png;base64,{}", inline.data))
    }

    /// Concatenated text of the first candidate, trimmed.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// generateVideos operation
// ---------------------------------------------------------------------------

/// A long-running video generation operation.
#[derive(Debug, Deserialize)]
pub struct Operation {
    /// Server-assigned operation name, used for status polling.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the operation has finished (successfully or not).
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub response: Option<VideosResponse>,
}

#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    #[serde(default, rename = "generatedVideos")]
    pub generated_videos: Vec<GeneratedVideo>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedVideo {
    #[serde(default)]
    pub video: Option<VideoFile>,
}

#[derive(Debug, Deserialize)]
pub struct VideoFile {
    #[serde(default)]
    pub uri: Option<String>,
}

impl Operation {
    /// Downloadable URI of the first generated video.
    ///
    /// Only meaningful on a `done` operation; a completed operation with no
    /// URI is a [`GenAiError::MissingMedia`].
    pub fn video_uri(&self) -> Result<&str, GenAiError> {
        self.response
            .as_ref()
            .and_then(|r| r.generated_videos.first())
            .and_then(|v| v.video.as_ref())
            .and_then(|f| f.uri.as_deref())
            .ok_or(GenAiError::MissingMedia("video URI"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
