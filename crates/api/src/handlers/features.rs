//! Handlers for the `/features` resource.
//!
//! Homepage "what we do" tiles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::feature::FeatureInput;
use ngocms_db::repositories::FeatureRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/features
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let items = FeatureRepo::list(&state.pool).await?;
    Ok(data(localize_opt(items, params.locale)))
}

/// GET /api/features/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = FeatureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Feature", id))?;
    Ok(data(localize_opt(item, params.locale)))
}

/// POST /api/features
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<FeatureInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = FeatureRepo::create(&state.pool, &input).await?;
    tracing::info!(feature_id = item.id, user_id = auth.user_id, "Feature created");
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/features/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<FeatureInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = FeatureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Feature", id))?;
    tracing::info!(feature_id = id, user_id = auth.user_id, "Feature updated");
    Ok(data(item))
}

/// DELETE /api/features/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = FeatureRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(feature_id = id, user_id = auth.user_id, "Feature deleted");
    }
    deleted(removed, "Feature", id)
}
