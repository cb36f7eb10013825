//! Handlers for the `/news` resource (press coverage).
//!
//! News is ordered by publication date, so reordering swaps two dates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use ngocms_core::reorder::SwapRequest;
use ngocms_core::types::DbId;
use ngocms_db::models::news::NewsArticleInput;
use ngocms_db::repositories::{swap_order, NewsRepo, Swappable};

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{LocaleParams, PaginationParams};
use crate::response::data;
use crate::state::AppState;

/// GET /api/news
///
/// Newest first, paginated with `?limit=&offset=`.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let articles = NewsRepo::list(&state.pool, limit, offset).await?;
    Ok(data(localize_opt(articles, params.locale)))
}

/// GET /api/news/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let article = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("NewsArticle", id))?;
    Ok(data(localize_opt(article, params.locale)))
}

/// POST /api/news
///
/// `published_on` defaults to today.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<NewsArticleInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let article = NewsRepo::create(&state.pool, &input).await?;
    tracing::info!(news_id = article.id, user_id = auth.user_id, "News article created");
    Ok((StatusCode::CREATED, data(article)))
}

/// PUT /api/news/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<NewsArticleInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let article = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("NewsArticle", id))?;
    tracing::info!(news_id = id, user_id = auth.user_id, "News article updated");
    Ok(data(article))
}

/// DELETE /api/news/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = NewsRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(news_id = id, user_id = auth.user_id, "News article deleted");
    }
    deleted(removed, "NewsArticle", id)
}

/// POST /api/news/reorder
pub async fn reorder(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<SwapRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;
    if !swap_order(&state.pool, Swappable::NewsArticles, req.first_id, req.second_id).await? {
        let missing = match NewsRepo::find_by_id(&state.pool, req.first_id).await? {
            Some(_) => req.second_id,
            None => req.first_id,
        };
        return Err(not_found("NewsArticle", missing));
    }
    tracing::info!(
        first_id = req.first_id,
        second_id = req.second_id,
        user_id = auth.user_id,
        "News publication dates swapped"
    );
    Ok(StatusCode::NO_CONTENT)
}
