use axum::{Json, extract::State};
use serde_json::{Map, Value, json};
use tracing::warn;

use crate::error::ApiError;
use crate::router::AppState;
use crate::types::cms::{ContentUpdate, ThemeUpdate};

/// GET /api/cms/content
///
/// Values are stored as JSON text; rows that fail to decode are passed
/// through as raw strings so one malformed section cannot take the whole
/// content map down. The fallback is logged.
pub async fn get_content(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let rows = state.storage.all_content().await?;
    let mut content = Map::new();
    for (section, raw) in rows {
        let Some(raw) = raw else {
            continue;
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => {
                content.insert(section, value);
            }
            Err(e) => {
                warn!(section = %section, error = %e, "cms content is not valid JSON, returning raw string");
                content.insert(section, Value::String(raw));
            }
        }
    }
    Ok(Json(json!({
        "status": "success",
        "content": content,
    })))
}

/// PUT /api/cms/content
pub async fn update_content(
    State(state): State<AppState>,
    Json(payload): Json<ContentUpdate>,
) -> Result<Json<Value>, ApiError> {
    let section = payload
        .section
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation("Section required"))?;

    let serialized = serde_json::to_string(&payload.content)?;
    state.storage.upsert_section(section, &serialized).await?;
    Ok(Json(json!({
        "status": "success",
        "message": "Content updated",
        "section": section,
    })))
}

/// GET /api/cms/theme
pub async fn get_theme(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let theme = match state.storage.get_theme().await? {
        Some(raw) => serde_json::from_str::<Value>(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "stored theme is not valid JSON, returning empty object");
            json!({})
        }),
        None => json!({}),
    };
    Ok(Json(json!({
        "status": "success",
        "theme": theme,
    })))
}

/// PUT /api/cms/theme
pub async fn update_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeUpdate>,
) -> Result<Json<Value>, ApiError> {
    let serialized = serde_json::to_string(&payload.theme)?;
    state.storage.upsert_theme(&serialized).await?;
    Ok(Json(json!({
        "status": "success",
        "message": "Theme updated",
    })))
}
