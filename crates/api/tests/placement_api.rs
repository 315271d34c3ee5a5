//! Integration tests for the catalog and the brand-overlay placement
//! endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, test_asset};

fn seeded_app() -> (axum::Router, std::sync::Arc<brandstudio_core::store::AppStore>) {
    let (app, store, _genai) = common::build_test_app();
    store.set_assets(vec![test_asset("occ-diwali-1"), test_asset("occ-holi-1")]);
    (app, store)
}

// ---------------------------------------------------------------------------
// Test: GET /assets lists the catalog, GET /assets/{id} fetches one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_list_and_fetch() {
    let (app, _store) = seeded_app();

    let response = get(app.clone(), "/api/v1/assets").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(app, "/api/v1/assets/occ-holi-1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "occ-holi-1");
    assert_eq!(json["data"]["language"], "hi");
}

// ---------------------------------------------------------------------------
// Test: catalog month filter validates its range
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_month_filter_validated() {
    let (app, _store) = seeded_app();

    let response = get(app.clone(), "/api/v1/assets?month=9").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(app.clone(), "/api/v1/assets?month=3").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let response = get(app, "/api/v1/assets?month=12").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: unknown asset returns 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_asset_returns_404() {
    let (app, _store) = seeded_app();

    let response = get(app, "/api/v1/assets/nope/placement").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: 9:16 placement returns the exact tall preset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tall_placement_matches_preset() {
    let (app, _store) = seeded_app();

    let response = get(
        app,
        "/api/v1/assets/occ-diwali-1/placement?aspect_ratio=9:16",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["aspectRatio"], "9:16");

    let placement = &json["data"]["placement"];
    assert_eq!(placement["x"], 50.0);
    assert_eq!(placement["y"], 92.0);
    assert_eq!(placement["width"], 25.0);
    assert_eq!(placement["opacity"], 0.85);
    assert_eq!(placement["alignment"], "center");

    // Center alignment pins the overlay to the horizontal middle.
    let style = &json["data"]["style"];
    assert_eq!(style["horizontal"]["edge"], "left");
    assert_eq!(style["horizontal"]["percent"], 50.0);
    assert_eq!(style["translateX"], -50.0);
}

// ---------------------------------------------------------------------------
// Test: unknown ratio degrades to the square preset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_ratio_falls_back_to_square() {
    let (app, _store) = seeded_app();

    let response = get(
        app,
        "/api/v1/assets/occ-diwali-1/placement?aspect_ratio=4:3",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["aspectRatio"], "1:1");
    assert_eq!(json["data"]["placement"]["x"], 85.0);
    assert_eq!(json["data"]["placement"]["y"], 85.0);
}

// ---------------------------------------------------------------------------
// Test: avoid_bottom hoists the overlay to the top band
// ---------------------------------------------------------------------------

#[tokio::test]
async fn avoid_bottom_moves_overlay_up() {
    let (app, _store) = seeded_app();

    let response = get(
        app,
        "/api/v1/assets/occ-diwali-1/placement?aspect_ratio=16:9&avoid_bottom=true",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let placement = &json["data"]["placement"];

    // Everything but the vertical position keeps the wide preset.
    assert_eq!(placement["x"], 92.0);
    assert_eq!(placement["y"], 12.0);
    assert_eq!(placement["width"], 12.0);
    assert_eq!(placement["alignment"], "right");
}
