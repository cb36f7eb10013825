//! Handlers for the `/electronic-media` resource (TV and video coverage).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::reorder::SwapRequest;
use ngocms_core::types::DbId;
use ngocms_db::models::electronic_media::ElectronicMediaInput;
use ngocms_db::repositories::{swap_order, ElectronicMediaRepo, Swappable};

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/electronic-media
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let items = ElectronicMediaRepo::list(&state.pool).await?;
    Ok(data(localize_opt(items, params.locale)))
}

/// GET /api/electronic-media/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = ElectronicMediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("ElectronicMedia", id))?;
    Ok(data(localize_opt(item, params.locale)))
}

/// POST /api/electronic-media
///
/// Without an explicit `sort_order` the new item goes last.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<ElectronicMediaInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = ElectronicMediaRepo::create(&state.pool, &input).await?;
    tracing::info!(
        media_id = item.id,
        user_id = auth.user_id,
        sort_order = item.sort_order,
        "Electronic media created"
    );
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/electronic-media/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ElectronicMediaInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = ElectronicMediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("ElectronicMedia", id))?;
    tracing::info!(media_id = id, user_id = auth.user_id, "Electronic media updated");
    Ok(data(item))
}

/// DELETE /api/electronic-media/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = ElectronicMediaRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(media_id = id, user_id = auth.user_id, "Electronic media deleted");
    }
    deleted(removed, "ElectronicMedia", id)
}

/// POST /api/electronic-media/reorder
///
/// Swaps the `sort_order` of two items. Nothing changes when either
/// id is unknown.
pub async fn reorder(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<SwapRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;
    let swapped =
        swap_order(&state.pool, Swappable::ElectronicMedia, req.first_id, req.second_id).await?;
    if !swapped {
        let missing = match ElectronicMediaRepo::find_by_id(&state.pool, req.first_id).await? {
            Some(_) => req.second_id,
            None => req.first_id,
        };
        return Err(not_found("ElectronicMedia", missing));
    }
    tracing::info!(
        first_id = req.first_id,
        second_id = req.second_id,
        user_id = auth.user_id,
        "Electronic media reordered"
    );
    Ok(StatusCode::NO_CONTENT)
}
