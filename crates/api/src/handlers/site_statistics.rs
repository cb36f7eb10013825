//! Handlers for the `/site-statistics` resource.
//!
//! The impact counters on the homepage ("12,000 children enrolled").

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::site_statistic::SiteStatisticInput;
use ngocms_db::repositories::SiteStatisticRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/site-statistics
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let items = SiteStatisticRepo::list(&state.pool).await?;
    Ok(data(localize_opt(items, params.locale)))
}

/// GET /api/site-statistics/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = SiteStatisticRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("SiteStatistic", id))?;
    Ok(data(localize_opt(item, params.locale)))
}

/// POST /api/site-statistics
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<SiteStatisticInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = SiteStatisticRepo::create(&state.pool, &input).await?;
    tracing::info!(statistic_id = item.id, user_id = auth.user_id, "SiteStatistic created");
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/site-statistics/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<SiteStatisticInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = SiteStatisticRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("SiteStatistic", id))?;
    tracing::info!(statistic_id = id, user_id = auth.user_id, "SiteStatistic updated");
    Ok(data(item))
}

/// DELETE /api/site-statistics/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = SiteStatisticRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(statistic_id = id, user_id = auth.user_id, "SiteStatistic deleted");
    }
    deleted(removed, "SiteStatistic", id)
}
