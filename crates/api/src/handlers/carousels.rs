//! Handlers for the `/carousels` resource (homepage slider).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::carousel::CarouselInput;
use ngocms_db::repositories::CarouselRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::{IncludeInactiveParams, LocaleParams};
use crate::response::data;
use crate::state::AppState;

/// GET /api/carousels
///
/// Inactive slides are listed only for signed-in users who ask for them.
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    AppQuery(params): AppQuery<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let include_inactive = params.include_inactive && viewer.is_authenticated();
    let carousels = CarouselRepo::list(&state.pool, include_inactive).await?;
    Ok(data(localize_opt(carousels, params.locale)))
}

/// GET /api/carousels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let carousel = CarouselRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Carousel", id))?;
    Ok(data(localize_opt(carousel, params.locale)))
}

/// POST /api/carousels
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CarouselInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let carousel = CarouselRepo::create(&state.pool, &input).await?;
    tracing::info!(carousel_id = carousel.id, user_id = auth.user_id, "Carousel created");
    Ok((StatusCode::CREATED, data(carousel)))
}

/// PUT /api/carousels/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CarouselInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let carousel = CarouselRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Carousel", id))?;
    tracing::info!(
        carousel_id = id,
        user_id = auth.user_id,
        is_active = carousel.is_active,
        "Carousel updated",
    );
    Ok(data(carousel))
}

/// DELETE /api/carousels/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = CarouselRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(carousel_id = id, user_id = auth.user_id, "Carousel deleted");
    }
    deleted(removed, "Carousel", id)
}
