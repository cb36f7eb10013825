//! Handlers for the `/careers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::career::{CareerInput, CareerListParams};
use ngocms_db::repositories::CareerRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/careers
///
/// Visitors see open positions only; `include_closed=true` widens the list
/// for signed-in users.
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    AppQuery(params): AppQuery<CareerListParams>,
) -> AppResult<impl IntoResponse> {
    let include_closed = params.include_closed && viewer.is_authenticated();
    let items = CareerRepo::list(&state.pool, include_closed).await?;
    Ok(data(localize_opt(items, params.locale)))
}

/// GET /api/careers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = CareerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Career", id))?;
    Ok(data(localize_opt(item, params.locale)))
}

/// POST /api/careers
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CareerInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = CareerRepo::create(&state.pool, &input).await?;
    tracing::info!(career_id = item.id, user_id = auth.user_id, "Career created");
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/careers/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CareerInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = CareerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Career", id))?;
    tracing::info!(
        career_id = id,
        user_id = auth.user_id,
        is_open = item.is_open,
        "Career updated",
    );
    Ok(data(item))
}

/// DELETE /api/careers/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = CareerRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(career_id = id, user_id = auth.user_id, "Career deleted");
    }
    deleted(removed, "Career", id)
}
