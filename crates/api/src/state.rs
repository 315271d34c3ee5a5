use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use brandstudio_core::store::AppStore;
use brandstudio_genai::GenerativeBackend;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store and the
/// generative backend are injected at construction so tests can build
/// independent instances with doubles.
#[derive(Clone)]
pub struct AppState {
    /// In-memory application state (user, catalog, marketplace).
    pub store: Arc<AppStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Generative API backend.
    pub genai: Arc<dyn GenerativeBackend>,
    /// Cancelled when the server begins graceful shutdown; long-running
    /// generation polls derive child tokens from it.
    pub shutdown: CancellationToken,
}
