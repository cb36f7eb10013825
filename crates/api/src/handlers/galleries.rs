//! Handlers for the `/galleries` resource and the images nested under it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::gallery::{GalleryImageInput, GalleryInput};
use ngocms_db::repositories::GalleryRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/galleries
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let galleries = GalleryRepo::list(&state.pool).await?;
    Ok(data(localize_opt(galleries, params.locale)))
}

/// GET /api/galleries/{id}
///
/// The gallery with all of its images.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let detail = GalleryRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Gallery", id))?;
    Ok(data(localize_opt(detail, params.locale)))
}

/// POST /api/galleries
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<GalleryInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let gallery = GalleryRepo::create(&state.pool, &input).await?;
    tracing::info!(gallery_id = gallery.id, user_id = auth.user_id, "Gallery created");
    Ok((StatusCode::CREATED, data(gallery)))
}

/// PUT /api/galleries/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<GalleryInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let gallery = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Gallery", id))?;
    tracing::info!(gallery_id = id, user_id = auth.user_id, "Gallery updated");
    Ok(data(gallery))
}

/// DELETE /api/galleries/{id}
///
/// Images go with the gallery (`ON DELETE CASCADE`).
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = GalleryRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(gallery_id = id, user_id = auth.user_id, "Gallery deleted");
    }
    deleted(removed, "Gallery", id)
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// GET /api/galleries/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    ensure_gallery_exists(&state, id).await?;
    let images = GalleryRepo::list_images(&state.pool, id).await?;
    Ok(data(localize_opt(images, params.locale)))
}

/// POST /api/galleries/{id}/images
pub async fn add_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<GalleryImageInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_gallery_exists(&state, id).await?;
    let image = GalleryRepo::add_image(&state.pool, id, &input).await?;
    tracing::info!(
        gallery_id = id,
        image_id = image.id,
        user_id = auth.user_id,
        "Gallery image added"
    );
    Ok((StatusCode::CREATED, data(image)))
}

/// PUT /api/galleries/{id}/images/{image_id}
pub async fn update_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, image_id)): Path<(DbId, DbId)>,
    AppJson(input): AppJson<GalleryImageInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let image = GalleryRepo::update_image(&state.pool, id, image_id, &input)
        .await?
        .ok_or_else(|| not_found("GalleryImage", image_id))?;
    tracing::info!(gallery_id = id, image_id, user_id = auth.user_id, "Gallery image updated");
    Ok(data(image))
}

/// DELETE /api/galleries/{id}/images/{image_id}
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = GalleryRepo::delete_image(&state.pool, id, image_id).await?;
    if removed {
        tracing::info!(gallery_id = id, image_id, user_id = auth.user_id, "Gallery image deleted");
    }
    deleted(removed, "GalleryImage", image_id)
}

async fn ensure_gallery_exists(state: &AppState, id: DbId) -> AppResult<()> {
    GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| not_found("Gallery", id))
}
