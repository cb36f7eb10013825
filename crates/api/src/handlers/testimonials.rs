//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::testimonial::TestimonialInput;
use ngocms_db::repositories::TestimonialRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let items = TestimonialRepo::list(&state.pool).await?;
    Ok(data(localize_opt(items, params.locale)))
}

/// GET /api/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Testimonial", id))?;
    Ok(data(localize_opt(item, params.locale)))
}

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<TestimonialInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(testimonial_id = item.id, user_id = auth.user_id, "Testimonial created");
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<TestimonialInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let item = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Testimonial", id))?;
    tracing::info!(testimonial_id = id, user_id = auth.user_id, "Testimonial updated");
    Ok(data(item))
}

/// DELETE /api/testimonials/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = TestimonialRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(testimonial_id = id, user_id = auth.user_id, "Testimonial deleted");
    }
    deleted(removed, "Testimonial", id)
}
