//! Handlers for the `/centers` resource (field offices and learning centres).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::{localize_opt, Locale};
use ngocms_core::types::DbId;
use ngocms_db::models::center::CenterInput;
use ngocms_db::repositories::CenterRepo;
use serde::Deserialize;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// Query parameters for `GET /centers`.
#[derive(Debug, Default, Deserialize)]
pub struct CenterListParams {
    pub locale: Option<Locale>,
    /// Restrict to one state, case-insensitively.
    pub state: Option<String>,
}

/// GET /api/centers
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CenterListParams>,
) -> AppResult<impl IntoResponse> {
    let region = params.state.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let items = CenterRepo::list(&state.pool, region).await?;
    Ok(data(localize_opt(items, params.locale)))
}

/// GET /api/centers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = CenterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Center", id))?;
    Ok(data(localize_opt(item, params.locale)))
}

/// POST /api/centers
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CenterInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = CenterRepo::create(&state.pool, &input).await?;
    tracing::info!(center_id = item.id, user_id = auth.user_id, "Center created");
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/centers/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CenterInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = CenterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Center", id))?;
    tracing::info!(center_id = id, user_id = auth.user_id, "Center updated");
    Ok(data(item))
}

/// DELETE /api/centers/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = CenterRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(center_id = id, user_id = auth.user_id, "Center deleted");
    }
    deleted(removed, "Center", id)
}
