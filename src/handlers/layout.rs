use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiError;
use crate::router::AppState;
use crate::service::catalog::floor_recommendations;
use crate::service::dispatch;
use crate::types::layout::{AutoPlaceRequest, PredictRequest, RecommendationsRequest};

/// POST /api/layout/predict
///
/// Pure dispatch: forwards the batch to the external layout service and
/// wraps whatever comes back.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<Value>, ApiError> {
    if payload.items.is_empty() {
        return Err(ApiError::validation("No items provided"));
    }

    debug!(
        items = payload.items.len(),
        room_type = %payload.room_type,
        "forwarding batch prediction"
    );
    let reply = state
        .layout
        .predict_batch(
            &payload.items,
            &payload.room_type,
            payload.floor_data.as_ref(),
        )
        .await?;

    Ok(Json(json!({
        "status": "success",
        "data": reply.data,
        "room_type": payload.room_type,
        "total_placed": reply.data.len(),
        "model_used": reply.model_used,
    })))
}

/// POST /api/layout/recommendations
pub async fn recommendations(
    Json(payload): Json<RecommendationsRequest>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(json!({
        "status": "success",
        "data": floor_recommendations(payload.floor),
    })))
}

/// POST /api/layout/reset
pub async fn reset() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Layout reset",
    }))
}

/// POST /api/layout/auto-place
pub async fn auto_place(
    State(state): State<AppState>,
    Json(payload): Json<AutoPlaceRequest>,
) -> Result<Json<Value>, ApiError> {
    let outcome = dispatch::auto_place(
        &state.layout,
        &state.planner,
        payload.use_ai,
        payload.room_width,
        payload.room_height,
    )
    .await?;
    Ok(Json(serde_json::to_value(outcome)?))
}
