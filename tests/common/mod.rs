#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use furnilayout::api::LayoutApi;
use furnilayout::db::{self, Storage};
use furnilayout::router::{AppState, api_router};
use serde_json::Value;
use url::Url;

pub struct TestApp {
    pub router: Router,
    pub storage: Storage,
    db_path: PathBuf,
    pub upload_dir: PathBuf,
}

/// Build a full router over a throwaway sqlite file and upload directory.
/// The layout service URL points at a closed port; tests that exercise the
/// AI path must not be written against this helper.
pub async fn spawn_app(tag: &str) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "furnilayout-{tag}-{}-{nanos}.sqlite",
        std::process::id()
    ));
    let mut upload_dir = std::env::temp_dir();
    upload_dir.push(format!(
        "furnilayout-uploads-{tag}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&upload_dir).expect("failed to create upload dir");

    let database_url = format!("sqlite:{}", db_path.display());
    let storage = db::spawn(&database_url).await.expect("db spawn failed");
    storage
        .upsert_user("admin", "pwd")
        .await
        .expect("admin seed failed");

    let layout = LayoutApi::new(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:9/").expect("bad test url"),
    );
    let state = AppState::new(
        storage.clone(),
        layout,
        upload_dir.clone(),
        Url::parse("http://localhost:8000").expect("bad test url"),
    );

    TestApp {
        router: api_router(state),
        storage,
        db_path,
        upload_dir,
    }
}

impl TestApp {
    pub fn teardown(self) {
        let _ = fs::remove_file(&self.db_path);
        let _ = fs::remove_dir_all(&self.upload_dir);
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not json")
}
