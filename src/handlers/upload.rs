use axum::{Json, extract::Multipart, extract::State};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;

use crate::error::ApiError;
use crate::router::AppState;

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// POST /api/news/upload-image
///
/// Accepts a multipart form with an `image` field, validates the extension
/// against the allowlist, and writes the file under the upload directory
/// with a timestamp prefix so names never collide. Nothing touches disk
/// until the payload has passed validation.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let field = loop {
        let Some(candidate) = multipart.next_field().await? else {
            return Err(ApiError::validation("No file uploaded"));
        };
        if candidate.name() == Some("image") {
            break candidate;
        }
    };

    let original = field
        .file_name()
        .map(sanitize_filename)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::validation("No file selected"))?;

    if !has_allowed_extension(&original) {
        return Err(ApiError::validation(
            "Invalid file type. Allowed: png, jpg, jpeg, gif, webp",
        ));
    }

    let data = field.bytes().await?;
    let filename = format!("{}_{original}", Utc::now().format("%Y%m%d_%H%M%S"));
    let path = state.upload_dir.join(&filename);
    tokio::fs::write(&path, &data).await?;
    info!(file = %filename, size = data.len(), "news image stored");

    let image_url = state
        .public_base_url
        .join(&format!("api/news/images/{filename}"))
        .map_err(|e| ApiError::Validation(format!("bad public base url: {e}")))?;
    Ok(Json(json!({
        "status": "success",
        "image_url": image_url,
    })))
}

/// Keep only filename-safe characters; anything resembling a path component
/// is flattened away.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_matches('.')
        .to_string()
}

fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
