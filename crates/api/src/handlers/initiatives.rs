//! Handlers for the `/initiatives` resource.
//!
//! Initiatives are shown in a hand-picked order; `POST /reorder` swaps two
//! of them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::reorder::SwapRequest;
use ngocms_core::slug::resolve_slug;
use ngocms_core::types::DbId;
use ngocms_db::models::initiative::InitiativeInput;
use ngocms_db::repositories::{swap_order, InitiativeRepo, Swappable};

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/initiatives
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let initiatives = InitiativeRepo::list(&state.pool).await?;
    Ok(data(localize_opt(initiatives, params.locale)))
}

/// GET /api/initiatives/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let initiative = InitiativeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Initiative", id))?;
    Ok(data(localize_opt(initiative, params.locale)))
}

/// POST /api/initiatives
///
/// Without an explicit `sort_order` the new initiative goes last.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<InitiativeInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let initiative = InitiativeRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(
        initiative_id = initiative.id,
        user_id = auth.user_id,
        sort_order = initiative.sort_order,
        "Initiative created"
    );
    Ok((StatusCode::CREATED, data(initiative)))
}

/// PUT /api/initiatives/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<InitiativeInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let initiative = InitiativeRepo::update(&state.pool, id, &slug, &input)
        .await?
        .ok_or_else(|| not_found("Initiative", id))?;
    tracing::info!(initiative_id = id, user_id = auth.user_id, "Initiative updated");
    Ok(data(initiative))
}

/// DELETE /api/initiatives/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = InitiativeRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(initiative_id = id, user_id = auth.user_id, "Initiative deleted");
    }
    deleted(removed, "Initiative", id)
}

/// POST /api/initiatives/reorder
///
/// Swaps the `sort_order` of two initiatives. Nothing changes when either
/// id is unknown.
pub async fn reorder(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<SwapRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;
    let swapped =
        swap_order(&state.pool, Swappable::Initiatives, req.first_id, req.second_id).await?;
    if !swapped {
        let missing = match InitiativeRepo::find_by_id(&state.pool, req.first_id).await? {
            Some(_) => req.second_id,
            None => req.first_id,
        };
        return Err(not_found("Initiative", missing));
    }
    tracing::info!(
        first_id = req.first_id,
        second_id = req.second_id,
        user_id = auth.user_id,
        "Initiatives reordered"
    );
    Ok(StatusCode::NO_CONTENT)
}
