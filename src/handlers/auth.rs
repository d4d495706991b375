use axum::{Json, extract::State};
use serde_json::{Value, json};
use subtle::ConstantTimeEq;
use tracing::info;

use crate::error::ApiError;
use crate::router::AppState;
use crate::types::auth::LoginRequest;

/// POST /api/cms/login
///
/// Checks the credential pair against the stored admin row. The password
/// comparison is constant-time; a missing user takes the same path as a bad
/// password so usernames cannot be probed.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = state.storage.find_user(&payload.username).await?;

    let stored = user.as_ref().map(|u| u.password.as_bytes()).unwrap_or(b"");
    let ok = stored.ct_eq(payload.password.as_bytes()).unwrap_u8() == 1 && user.is_some();
    if !ok {
        return Err(ApiError::Unauthorized);
    }

    info!(username = %payload.username, "admin login");
    Ok(Json(json!({
        "status": "success",
        "message": "Login successful",
        "token": uuid::Uuid::new_v4().simple().to_string(),
    })))
}
