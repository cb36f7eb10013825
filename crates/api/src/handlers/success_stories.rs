//! Handlers for the `/success-stories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::error::CoreError;
use ngocms_core::locale::localize_opt;
use ngocms_core::slug::resolve_slug;
use ngocms_core::types::DbId;
use ngocms_db::models::success_story::SuccessStoryInput;
use ngocms_db::repositories::SuccessStoryRepo;

use super::{deleted, not_found};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/success-stories
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let stories = SuccessStoryRepo::list(&state.pool).await?;
    Ok(data(localize_opt(stories, params.locale)))
}

/// GET /api/success-stories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let story = SuccessStoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("SuccessStory", id))?;
    Ok(data(localize_opt(story, params.locale)))
}

/// GET /api/success-stories/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let story = SuccessStoryRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "SuccessStory",
                key: slug.clone(),
            })
        })?;
    Ok(data(localize_opt(story, params.locale)))
}

/// POST /api/success-stories
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<SuccessStoryInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let story = SuccessStoryRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(
        story_id = story.id,
        user_id = auth.user_id,
        slug = %story.slug,
        "Success story created",
    );
    Ok((StatusCode::CREATED, data(story)))
}

/// PUT /api/success-stories/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<SuccessStoryInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let story = SuccessStoryRepo::update(&state.pool, id, &slug, &input)
        .await?
        .ok_or_else(|| not_found("SuccessStory", id))?;
    tracing::info!(story_id = id, user_id = auth.user_id, "Success story updated");
    Ok(data(story))
}

/// DELETE /api/success-stories/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = SuccessStoryRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(story_id = id, user_id = auth.user_id, "Success story deleted");
    }
    deleted(removed, "SuccessStory", id)
}
