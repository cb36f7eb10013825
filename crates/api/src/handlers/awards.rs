//! Handlers for the `/awards` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::award::AwardInput;
use ngocms_db::repositories::AwardRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/awards
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let items = AwardRepo::list(&state.pool).await?;
    Ok(data(localize_opt(items, params.locale)))
}

/// GET /api/awards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = AwardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Award", id))?;
    Ok(data(localize_opt(item, params.locale)))
}

/// POST /api/awards
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<AwardInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = AwardRepo::create(&state.pool, &input).await?;
    tracing::info!(award_id = item.id, user_id = auth.user_id, "Award created");
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/awards/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<AwardInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = AwardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Award", id))?;
    tracing::info!(award_id = id, user_id = auth.user_id, "Award updated");
    Ok(data(item))
}

/// DELETE /api/awards/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = AwardRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(award_id = id, user_id = auth.user_id, "Award deleted");
    }
    deleted(removed, "Award", id)
}
