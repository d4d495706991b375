use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::router::AppState;
use crate::types::news::{NewNews, NewsPatch};

/// GET /api/news
pub async fn list_news(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let news = state.storage.list_news().await?;
    Ok(Json(json!({
        "status": "success",
        "news": news,
    })))
}

/// GET /api/news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let news = state
        .storage
        .get_news(id)
        .await?
        .ok_or_else(|| ApiError::not_found("News not found"))?;
    Ok(Json(json!({
        "status": "success",
        "news": news,
    })))
}

/// POST /api/news
pub async fn create_news(
    State(state): State<AppState>,
    Json(payload): Json<NewNews>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let title = payload
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("Title required"))?;

    let id = state
        .storage
        .create_news(title, payload.body.as_deref(), payload.image_url.as_deref())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "News created",
            "id": id,
        })),
    ))
}

/// PUT /api/news/{id}
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<NewsPatch>,
) -> Result<Json<Value>, ApiError> {
    let updated = state.storage.update_news(id, &patch).await?;
    if !updated {
        return Err(ApiError::not_found("News not found or no changes made"));
    }
    Ok(Json(json!({
        "status": "success",
        "message": "News updated",
    })))
}

/// DELETE /api/news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.storage.delete_news(id).await?;
    if !deleted {
        return Err(ApiError::not_found("News not found"));
    }
    Ok(Json(json!({
        "status": "success",
        "message": "News deleted",
    })))
}
