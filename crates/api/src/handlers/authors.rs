//! Handlers for the `/authors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::locale::localize_opt;
use ngocms_core::types::DbId;
use ngocms_db::models::blog::AuthorInput;
use ngocms_db::repositories::AuthorRepo;

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/authors
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(data(localize_opt(authors, params.locale)))
}

/// GET /api/authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Author", id))?;
    Ok(data(localize_opt(author, params.locale)))
}

/// POST /api/authors
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<AuthorInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let author = AuthorRepo::create(&state.pool, &input).await?;
    tracing::info!(author_id = author.id, user_id = auth.user_id, "Author created");
    Ok((StatusCode::CREATED, data(author)))
}

/// PUT /api/authors/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<AuthorInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let author = AuthorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Author", id))?;
    tracing::info!(author_id = id, user_id = auth.user_id, "Author updated");
    Ok(data(author))
}

/// DELETE /api/authors/{id}
///
/// Rejected with 400 while the author still has posts.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = AuthorRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(author_id = id, user_id = auth.user_id, "Author deleted");
    }
    deleted(removed, "Author", id)
}
