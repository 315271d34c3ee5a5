//! Integration tests for the mock session and brand onboarding.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, put_json, sign_in, test_brand, test_user};
use brandstudio_core::user::{Credits, UserRole};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /session with no user returns data: null
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_session_returns_null() {
    let (app, _store, _genai) = common::build_test_app();
    let response = get(app, "/api/v1/session").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

// ---------------------------------------------------------------------------
// Test: PUT /session signs the user in, GET reflects it
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_session_round_trips() {
    let (app, _store, _genai) = common::build_test_app();
    let user = test_user(UserRole::User, Credits { images: 3, videos: 1 });

    sign_in(&app, &user).await;

    let response = get(app, "/api/v1/session").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["id"], "user-1");
    assert_eq!(json["data"]["role"], "USER");
    assert_eq!(json["data"]["credits"]["images"], 3);
    assert_eq!(json["data"]["brand"]["companyName"], "Sunrise Sweets");
}

// ---------------------------------------------------------------------------
// Test: POST /session/demo seeds the demo user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_session_seeds_demo_user() {
    let (app, store, _genai) = common::build_test_app();

    let response = common::post_json(app, "/api/v1/session/demo", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "user_123");
    assert_eq!(json["data"]["credits"]["images"], 3);
    assert_eq!(json["data"]["credits"]["videos"], 3);
    // The demo user is already onboarded.
    assert_eq!(json["data"]["brand"]["companyName"], "Sunshine Bakery");

    assert!(store.user().is_some());
}

// ---------------------------------------------------------------------------
// Test: DELETE /session signs out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clear_session_signs_out() {
    let (app, store, _genai) = common::build_test_app();
    sign_in(&app, &test_user(UserRole::User, Credits { images: 0, videos: 0 })).await;

    let response = delete(app.clone(), "/api/v1/session").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(store.user().is_none());
}

// ---------------------------------------------------------------------------
// Test: PUT /session/brand without a session returns 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_brand_requires_session() {
    let (app, _store, _genai) = common::build_test_app();

    let response = put_json(
        app,
        "/api/v1/session/brand",
        serde_json::to_value(test_brand()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: PUT /session/brand stores the profile on the user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_brand_updates_user() {
    let (app, store, _genai) = common::build_test_app();
    let mut user = test_user(UserRole::User, Credits { images: 0, videos: 0 });
    user.brand = None;
    sign_in(&app, &user).await;

    let response = put_json(
        app,
        "/api/v1/session/brand",
        serde_json::to_value(test_brand()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["brand"]["industry"], "Food & Beverage");

    let stored = store.user().unwrap();
    assert_eq!(stored.brand.unwrap().company_name, "Sunrise Sweets");
}

// ---------------------------------------------------------------------------
// Test: PUT /session/brand rejects an invalid brand profile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_brand_rejects_bad_color() {
    let (app, store, _genai) = common::build_test_app();
    let mut user = test_user(UserRole::User, Credits { images: 0, videos: 0 });
    user.brand = None;
    sign_in(&app, &user).await;

    let mut brand = serde_json::to_value(test_brand()).unwrap();
    brand["brandColors"] = json!(["not-a-color"]);

    let response = put_json(app, "/api/v1/session/brand", brand).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // The invalid profile was not stored.
    assert!(store.user().unwrap().brand.is_none());
}
