//! Handlers for the `/enquiries` resource (contact form).
//!
//! Submitting is public; everything else is for signed-in staff.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use ngocms_core::types::DbId;
use ngocms_db::models::enquiry::{CreateEnquiry, EnquiryListParams, ResolveEnquiry};
use ngocms_db::repositories::EnquiryRepo;
use ngocms_events::notifications;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::data;
use crate::state::AppState;

/// POST /api/enquiries
///
/// Stores the enquiry, then queues an acknowledgement to the visitor and,
/// when `NOTIFY_EMAIL` is set, a notification to staff. Email failures
/// never fail the submission.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEnquiry>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let enquiry = EnquiryRepo::create(&state.pool, &input).await?;
    tracing::info!(enquiry_id = enquiry.id, "Enquiry received");

    let _ = state
        .email
        .enqueue(notifications::enquiry_acknowledgement(&enquiry));
    if let Some(admin) = state.config.notify_email.as_deref() {
        let _ = state
            .email
            .enqueue(notifications::enquiry_notification(&enquiry, admin));
    }

    Ok((StatusCode::CREATED, data(enquiry)))
}

/// GET /api/enquiries
///
/// Newest first. Filter with `?is_resolved=`, page with `?limit=&offset=`.
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<EnquiryListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let enquiries = EnquiryRepo::list(&state.pool, params.is_resolved, limit, offset).await?;
    Ok(data(enquiries))
}

/// GET /api/enquiries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Enquiry", id))?;
    Ok(data(enquiry))
}

/// PUT /api/enquiries/{id}/resolve
pub async fn resolve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ResolveEnquiry>,
) -> AppResult<impl IntoResponse> {
    let enquiry = EnquiryRepo::set_resolved(&state.pool, id, input.is_resolved)
        .await?
        .ok_or_else(|| not_found("Enquiry", id))?;
    tracing::info!(
        enquiry_id = id,
        is_resolved = input.is_resolved,
        user_id = auth.user_id,
        "Enquiry resolution updated"
    );
    Ok(data(enquiry))
}

/// DELETE /api/enquiries/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = EnquiryRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(enquiry_id = id, user_id = auth.user_id, "Enquiry deleted");
    }
    deleted(removed, "Enquiry", id)
}
