//! Handlers for the `/banners` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::banner::BannerInput;
use ngocms_db::repositories::BannerRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::{IncludeInactiveParams, LocaleParams};
use crate::response::data;
use crate::state::AppState;

/// GET /api/banners
///
/// Inactive banners are listed only for signed-in users who ask for them.
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    AppQuery(params): AppQuery<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let include_inactive = params.include_inactive && viewer.is_authenticated();
    let banners = BannerRepo::list(&state.pool, include_inactive).await?;
    Ok(data(localize_opt(banners, params.locale)))
}

/// GET /api/banners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let banner = BannerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Banner", id))?;
    Ok(data(localize_opt(banner, params.locale)))
}

/// POST /api/banners
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<BannerInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let banner = BannerRepo::create(&state.pool, &input).await?;
    tracing::info!(banner_id = banner.id, user_id = auth.user_id, "Banner created");
    Ok((StatusCode::CREATED, data(banner)))
}

/// PUT /api/banners/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<BannerInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let banner = BannerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Banner", id))?;
    tracing::info!(
        banner_id = id,
        user_id = auth.user_id,
        is_active = banner.is_active,
        "Banner updated",
    );
    Ok(data(banner))
}

/// DELETE /api/banners/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = BannerRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(banner_id = id, user_id = auth.user_id, "Banner deleted");
    }
    deleted(removed, "Banner", id)
}
