//! Media uploads to the configured storage provider.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::media::{
    build_object_key, resolve_content_type, validate_object_key, validate_size, DEFAULT_FOLDER,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::response::data;
use crate::state::AppState;

/// Returned by `POST /uploads`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub key: String,
    pub url: String,
    pub content_type: &'static str,
    pub size: usize,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUploadParams {
    pub key: String,
}

struct FilePart {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// POST /api/uploads
///
/// Multipart form with a `file` part and an optional `folder` text part
/// (default `uploads`). Parts may arrive in any order.
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<impl IntoResponse> {
    let mut multipart = multipart?;
    let mut file: Option<FilePart> = None;
    let mut folder: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                file = Some(FilePart {
                    filename,
                    content_type,
                    bytes,
                });
            }
            Some("folder") => {
                let value = field.text().await?;
                let value = value.trim();
                if !value.is_empty() {
                    folder = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing 'file' part".into()))?;
    let content_type = resolve_content_type(file.content_type.as_deref(), &file.filename)?;
    validate_size(file.bytes.len(), state.config.max_upload_bytes)?;

    let folder = folder.as_deref().unwrap_or(DEFAULT_FOLDER);
    let key = build_object_key(folder, content_type)?;
    let size = file.bytes.len();
    let stored = state.storage.put(&key, file.bytes, content_type).await?;

    tracing::info!(
        key = %stored.key,
        content_type,
        size,
        user_id = auth.user_id,
        "File uploaded"
    );

    Ok((
        StatusCode::CREATED,
        data(UploadResponse {
            key: stored.key,
            url: stored.url,
            content_type,
            size,
        }),
    ))
}

/// DELETE /api/uploads?key=banners/abc.png
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(params): AppQuery<DeleteUploadParams>,
) -> AppResult<StatusCode> {
    validate_object_key(&params.key)?;
    state.storage.delete(&params.key).await?;
    tracing::info!(key = %params.key, user_id = auth.user_id, "File deleted");
    Ok(StatusCode::NO_CONTENT)
}
