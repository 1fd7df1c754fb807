use std::path::Path as StdPath;
use std::sync::Arc;

use axum::{
    extract::{multipart::Field, Multipart, State},
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::UploadResponse,
};

/// Writes an uploaded file under the uploads dir with a fresh uuid filename
/// and returns the reference path clients embed in messages and posts. The
/// file content is never interpreted.
pub(crate) async fn store_image(
    uploads_dir: &StdPath,
    field: Field<'_>,
) -> Result<String, ApiError> {
    let ext = field
        .file_name()
        .and_then(|name| StdPath::new(name).extension().and_then(|e| e.to_str()))
        .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or("bin")
        .to_ascii_lowercase();

    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
    if data.is_empty() {
        return Err(ApiError::BadRequest("Empty upload".to_string()));
    }

    tokio::fs::create_dir_all(uploads_dir)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to prepare uploads dir: {}", e)))?;
    let filename = format!("{}.{}", Uuid::new_v4(), ext);
    tokio::fs::write(uploads_dir.join(&filename), &data)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to store upload: {}", e)))?;

    Ok(format!("/uploads/{}", filename))
}

async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("image") || field.file_name().is_some() {
            let path = store_image(&state.uploads_dir, field).await?;
            return Ok(Json(UploadResponse { path }));
        }
    }
    Err(ApiError::BadRequest("Missing image field".to_string()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/uploads/images", post(upload_image))
}
