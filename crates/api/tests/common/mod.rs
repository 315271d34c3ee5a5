//! Shared fixtures for API integration tests.
//!
//! Tests run against the full middleware stack via [`build_test_app`], with
//! the generative boundary replaced by [`MockBackend`] so no network traffic
//! ever leaves the test process.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use brandstudio_api::config::ServerConfig;
use brandstudio_api::router::build_app_router;
use brandstudio_api::state::AppState;
use brandstudio_core::assets::{AssetKind, Language, OccasionAsset};
use brandstudio_core::brand::{BrandConfig, FontStyle, Personality};
use brandstudio_core::prompt::{ImagePromptParams, LogoPromptParams};
use brandstudio_core::store::AppStore;
use brandstudio_core::user::{Credits, User, UserRole};
use brandstudio_genai::{GenAiError, GenerativeBackend, VideoRequest};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        genai_base_url: "http://localhost:0".to_string(),
        genai_api_key: "test-key".to_string(),
        video_poll_interval_secs: 1,
        video_poll_deadline_secs: 5,
    }
}

/// Test double for the generative boundary.
///
/// Counts calls per operation and returns canned media references, or a
/// canned upstream failure when `fail` is set.
#[derive(Default)]
pub struct MockBackend {
    pub logo_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
    pub video_calls: AtomicUsize,
    pub copy_calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl MockBackend {
    fn check_failure(&self) -> Result<(), GenAiError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(GenAiError::Api {
                status: 500,
                body: "upstream exploded".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn generate_logo(&self, _params: &LogoPromptParams) -> Result<String, GenAiError> {
        self.logo_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok("data:image/png;base64,bG9nbw==".to_string())
    }

    async fn generate_image(&self, _params: &ImagePromptParams) -> Result<String, GenAiError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok("data:image/png;base64,aW1hZ2U=".to_string())
    }

    async fn generate_occasion_copy(
        &self,
        occasion: &str,
        language: Language,
        year: i32,
    ) -> Result<String, GenAiError> {
        self.copy_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(format!(
            "Wishing you a joyous {occasion} {year} ({})",
            language.code()
        ))
    }

    async fn generate_video(
        &self,
        _request: &VideoRequest,
        cancel: CancellationToken,
    ) -> Result<String, GenAiError> {
        self.video_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        // Mirror the real client's poll loop, which aborts as soon as the
        // token fires.
        if cancel.is_cancelled() {
            return Err(GenAiError::Cancelled);
        }
        Ok("https://videos.example.com/clip.mp4&key=test-key".to_string())
    }
}

/// Build the full application router with all middleware layers, plus
/// handles to the store and the mock backend for assertions.
///
/// This goes through `build_app_router` so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app() -> (Router, Arc<AppStore>, Arc<MockBackend>) {
    let (app, store, genai, _shutdown) = build_test_app_with_shutdown();
    (app, store, genai)
}

/// Like [`build_test_app`], but also hands back the server shutdown token
/// so tests can abort in-flight generation polls.
pub fn build_test_app_with_shutdown(
) -> (Router, Arc<AppStore>, Arc<MockBackend>, CancellationToken) {
    let config = test_config();
    let store = Arc::new(AppStore::new());
    let genai = Arc::new(MockBackend::default());
    let shutdown = CancellationToken::new();

    let state = AppState {
        store: Arc::clone(&store),
        config: Arc::new(config.clone()),
        genai: Arc::clone(&genai) as Arc<dyn GenerativeBackend>,
        shutdown: shutdown.clone(),
    };

    (build_app_router(state, &config), store, genai, shutdown)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A signed-in user with the given role and credit balance.
pub fn test_user(role: UserRole, credits: Credits) -> User {
    User {
        id: "user-1".to_string(),
        name: "Asha Kulkarni".to_string(),
        email: "asha@example.com".to_string(),
        role,
        brand: Some(test_brand()),
        credits,
        generation_history: vec![],
    }
}

pub fn test_brand() -> BrandConfig {
    BrandConfig {
        company_name: "Sunrise Sweets".to_string(),
        logo_url: None,
        website: None,
        tagline: Some("Fresh every festival".to_string()),
        contact_number: None,
        brand_colors: vec!["#FF6B35".to_string(), "#1A2B3C".to_string()],
        font_style: FontStyle::Modern,
        industry: "Food & Beverage".to_string(),
        personality: Some(Personality::FriendlyApproachable),
        target_audience: Some("Families".to_string()),
    }
}

pub fn test_asset(id: &str) -> OccasionAsset {
    OccasionAsset {
        id: id.to_string(),
        title: "Diwali Glow".to_string(),
        kind: AssetKind::Image,
        url: "https://cdn.example.com/diwali.png".to_string(),
        thumbnail: None,
        month: 9,
        date: None,
        occasion: "Diwali".to_string(),
        language: Language::Hi,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sign a user in through the API (PUT /api/v1/session).
pub async fn sign_in(app: &Router, user: &User) {
    let response = put_json(
        app.clone(),
        "/api/v1/session",
        serde_json::to_value(user).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
