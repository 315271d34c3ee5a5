//! Client for the external generative content API.
//!
//! The brand studio delegates all media synthesis to a hosted generative
//! API. This crate is the adapter at that boundary:
//!
//! - [`backend::GenerativeBackend`] — the trait the rest of the system
//!   programs against (and tests substitute with doubles).
//! - [`client::GenerativeClient`] — the HTTP implementation over [`reqwest`]:
//!   one in-flight request per invocation, no retries, and a cancellable,
//!   deadline-bounded poll loop for long-running video operations.
//! - [`messages`] — wire-shape types and the inline-media extraction rules.

pub mod backend;
pub mod client;
pub mod config;
pub mod messages;

pub use backend::{GenerativeBackend, VideoAspect, VideoRequest, VideoResolution};
pub use client::GenerativeClient;
pub use config::GenAiConfig;

/// Errors at the generative API boundary.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Generative API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no usable media payload.
    #[error("No {0} in generative response")]
    MissingMedia(&'static str),

    /// The video operation did not complete before the poll deadline.
    #[error("Video operation did not complete within {0} seconds")]
    Timeout(u64),

    /// The caller cancelled the poll loop.
    #[error("Video operation cancelled")]
    Cancelled,
}
