mod common;

use axum::http::StatusCode;
use common::{empty_request, json_request, read_json, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn predict_with_no_items_returns_400() {
    let app = spawn_app("layout-predict-empty").await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/layout/predict",
            json!({"items": [], "room_type": "living_room"}),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "No items provided");

    app.teardown();
}

#[tokio::test]
async fn recommendations_follow_the_floor_map() {
    let app = spawn_app("layout-recommendations").await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/layout/recommendations",
            json!({"floor": 2}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("not an array")
        .iter()
        .map(|r| r["name"].as_str().expect("missing name"))
        .collect();
    assert_eq!(names, vec!["Bed", "Wardrobe", "Nightstand"]);

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/layout/recommendations",
            json!({"floor": 9}),
        ))
        .await
        .expect("request failed");
    let body = read_json(resp).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

    app.teardown();
}

#[tokio::test]
async fn reset_returns_success_envelope() {
    let app = spawn_app("layout-reset").await;

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("POST", "/api/layout/reset"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Layout reset");

    app.teardown();
}

// The helper's layout service URL points at a closed port, so a successful
// auto-place here proves the AI engine was never contacted.
#[tokio::test]
async fn auto_place_without_ai_uses_the_grid_planner() {
    let app = spawn_app("layout-auto-place-no-ai").await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/layout/auto-place",
            json!({"room_width": 17.0, "room_height": 11.0, "use_ai": false}),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["model_used"], false);
    assert_eq!(body["algorithm"], "grid");
    assert!(body["total_placed"].as_u64().is_some_and(|n| n > 0));

    app.teardown();
}

#[tokio::test]
async fn auto_place_with_unreachable_ai_service_returns_500() {
    let app = spawn_app("layout-auto-place-ai-down").await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/layout/auto-place", json!({})))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "error");

    app.teardown();
}
