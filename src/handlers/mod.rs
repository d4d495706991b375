pub mod auth;
pub mod cms;
pub mod layout;
pub mod news;
pub mod questions;
pub mod upload;

use axum::Json;
use serde_json::{Value, json};

/// GET /api/status
pub async fn status_handler() -> Json<Value> {
    Json(json!({
        "status": "success",
        "service": "FurniLayout API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
