//! Handlers for the `/blogs` resource.
//!
//! Visitors only ever see published posts; signed-in editors also see
//! drafts and may filter by status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::error::CoreError;
use ngocms_core::locale::{localize_opt, Localize};
use ngocms_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use ngocms_core::slug::resolve_slug;
use ngocms_core::types::DbId;
use ngocms_db::models::blog::{
    validate_blog_status, BlogInput, BlogListParams, BLOG_STATUS_PUBLISHED,
};
use ngocms_db::repositories::{BlogFilter, BlogRepo};

use super::{deleted, not_found};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    AppQuery(params): AppQuery<BlogListParams>,
) -> AppResult<impl IntoResponse> {
    let status = if viewer.is_authenticated() {
        params.status.as_deref()
    } else {
        Some(BLOG_STATUS_PUBLISHED)
    };
    if let Some(status) = status {
        validate_blog_status(status)?;
    }

    let filter = BlogFilter {
        locale: params.locale,
        status,
        category: params.category.as_deref(),
        tag: params.tag.as_deref(),
    };
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let blogs = BlogRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(data(blogs))
}

/// GET /api/blogs/{id}
///
/// Returns the post with its author, category and tags.
pub async fn get_by_id(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let blog = BlogRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|blog| blog.status == BLOG_STATUS_PUBLISHED || viewer.is_authenticated())
        .ok_or_else(|| not_found("Blog", id))?;
    let detail = BlogRepo::detail(&state.pool, blog).await?;
    Ok(data(localize_opt(detail, params.locale)))
}

/// GET /api/blogs/slug/{slug}
///
/// Slugs are unique per locale, so `?locale=` (default `en`) selects the post.
pub async fn get_by_slug(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(slug): Path<String>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let locale = params.locale.unwrap_or_default();
    let blog = BlogRepo::find_by_slug(&state.pool, &slug, locale)
        .await?
        .filter(|blog| blog.status == BLOG_STATUS_PUBLISHED || viewer.is_authenticated())
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Blog",
                key: slug.clone(),
            })
        })?;
    let detail = BlogRepo::detail(&state.pool, blog).await?;
    Ok(data(detail.localize(locale)))
}

/// POST /api/blogs
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<BlogInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;

    let blog = BlogRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(blog_id = blog.id, user_id = auth.user_id, slug = %blog.slug, "Blog created");

    let detail = BlogRepo::detail(&state.pool, blog).await?;
    Ok((StatusCode::CREATED, data(detail)))
}

/// PUT /api/blogs/{id}
///
/// Replaces the post, including its full tag set.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<BlogInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;

    let blog = BlogRepo::update(&state.pool, id, &slug, &input)
        .await?
        .ok_or_else(|| not_found("Blog", id))?;
    tracing::info!(blog_id = id, user_id = auth.user_id, status = %blog.status, "Blog updated");

    let detail = BlogRepo::detail(&state.pool, blog).await?;
    Ok(data(detail))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = BlogRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(blog_id = id, user_id = auth.user_id, "Blog deleted");
    }
    deleted(removed, "Blog", id)
}
