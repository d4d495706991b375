use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::router::AppState;
use crate::types::question::{AnswerUpdate, NewQuestion};

/// POST /api/questions
pub async fn submit_question(
    State(state): State<AppState>,
    Json(payload): Json<NewQuestion>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let question = payload
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::validation("Question required"))?;

    let id = state.storage.create_question(question).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Question submitted",
            "id": id,
        })),
    ))
}

/// GET /api/questions/all
pub async fn list_questions(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let questions = state.storage.list_questions().await?;
    Ok(Json(json!({
        "status": "success",
        "questions": questions,
    })))
}

/// GET /api/questions/answered
pub async fn list_answered(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let questions = state.storage.list_answered().await?;
    Ok(Json(json!({
        "status": "success",
        "questions": questions,
    })))
}

/// PUT /api/questions/{id}/answer
pub async fn answer_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AnswerUpdate>,
) -> Result<Json<Value>, ApiError> {
    let answer = payload
        .answer
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::validation("Answer required"))?;

    let updated = state.storage.answer_question(id, answer).await?;
    if !updated {
        return Err(ApiError::not_found("Question not found"));
    }
    Ok(Json(json!({
        "status": "success",
        "message": "Question answered",
    })))
}

/// DELETE /api/questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.storage.delete_question(id).await?;
    if !deleted {
        return Err(ApiError::not_found("Question not found"));
    }
    Ok(Json(json!({
        "status": "success",
        "message": "Question deleted",
    })))
}
