//! Handlers for the `/join-applications` resource (volunteer sign-ups).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use ngocms_core::types::DbId;
use ngocms_db::models::join_application::{
    CreateJoinApplication, JoinApplicationListParams, UpdateApplicationStatus,
};
use ngocms_db::repositories::JoinApplicationRepo;
use ngocms_events::notifications;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::data;
use crate::state::AppState;

/// POST /api/join-applications
///
/// Public. Queues the same acknowledgement/notification pair as enquiries.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateJoinApplication>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let application = JoinApplicationRepo::create(&state.pool, &input).await?;
    tracing::info!(application_id = application.id, "Join application received");

    let _ = state
        .email
        .enqueue(notifications::application_acknowledgement(&application));
    if let Some(admin) = state.config.notify_email.as_deref() {
        let _ = state
            .email
            .enqueue(notifications::application_notification(&application, admin));
    }

    Ok((StatusCode::CREATED, data(application)))
}

/// GET /api/join-applications
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<JoinApplicationListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let applications =
        JoinApplicationRepo::list(&state.pool, params.status.as_deref(), limit, offset).await?;
    Ok(data(applications))
}

/// GET /api/join-applications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = JoinApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("JoinApplication", id))?;
    Ok(data(application))
}

/// PUT /api/join-applications/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateApplicationStatus>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let application = JoinApplicationRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| not_found("JoinApplication", id))?;
    tracing::info!(
        application_id = id,
        status = %input.status,
        user_id = auth.user_id,
        "Join application status updated"
    );
    Ok(data(application))
}

/// DELETE /api/join-applications/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = JoinApplicationRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(application_id = id, user_id = auth.user_id, "Join application deleted");
    }
    deleted(removed, "JoinApplication", id)
}
