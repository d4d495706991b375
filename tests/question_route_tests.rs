mod common;

use axum::http::StatusCode;
use common::{empty_request, json_request, read_json, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn submit_empty_question_returns_400() {
    let app = spawn_app("question-empty").await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/questions", json!({"question": "  "})))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Question required");

    app.teardown();
}

#[tokio::test]
async fn answered_listing_excludes_unanswered_rows() {
    let app = spawn_app("question-answered-filter").await;
    let answered_id = app
        .storage
        .create_question("Do you ship abroad?")
        .await
        .expect("insert failed");
    app.storage
        .create_question("Is the showroom open on Sundays?")
        .await
        .expect("insert failed");
    app.storage
        .answer_question(answered_id, "Yes, within the EU.")
        .await
        .expect("answer failed");

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/questions/answered"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let questions = body["questions"].as_array().expect("not an array");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["id"].as_i64(), Some(answered_id));
    assert_eq!(questions[0]["answer"], "Yes, within the EU.");
    assert_eq!(questions[0]["answered"], true);

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/api/questions/all"))
        .await
        .expect("request failed");
    let body = read_json(resp).await;
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(2));

    app.teardown();
}

#[tokio::test]
async fn answering_missing_question_returns_404() {
    let app = spawn_app("question-answer-missing").await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/questions/999/answer",
            json!({"answer": "nobody asked"}),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    app.teardown();
}

#[tokio::test]
async fn submit_answer_delete_flow() {
    let app = spawn_app("question-flow").await;

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/questions",
            json!({"question": "Do you do custom sizes?"}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = read_json(resp).await["id"].as_i64().expect("missing id");

    let resp = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/questions/{id}/answer"),
            json!({"answer": "On request."}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/questions/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/questions/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    app.teardown();
}
