//! Handlers shared by `/blog-categories` and `/blog-tags`.
//!
//! The routes attach the [`Taxonomy`] they serve as an `Extension`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use ngocms_core::locale::localize_opt;
use ngocms_core::slug::resolve_slug;
use ngocms_core::types::DbId;
use ngocms_db::models::blog::TaxonInput;
use ngocms_db::repositories::{Taxonomy, TaxonomyRepo};

use super::{deleted, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::LocaleParams;
use crate::response::data;
use crate::state::AppState;

/// GET /api/blog-categories, GET /api/blog-tags
pub async fn list(
    State(state): State<AppState>,
    Extension(taxonomy): Extension<Taxonomy>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let items = TaxonomyRepo::list(&state.pool, taxonomy).await?;
    Ok(data(localize_opt(items, params.locale)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(taxonomy): Extension<Taxonomy>,
    Path(id): Path<DbId>,
    AppQuery(params): AppQuery<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let item = TaxonomyRepo::find_by_id(&state.pool, taxonomy, id)
        .await?
        .ok_or_else(|| not_found(taxonomy.entity(), id))?;
    Ok(data(localize_opt(item, params.locale)))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(taxonomy): Extension<Taxonomy>,
    auth: AuthUser,
    AppJson(input): AppJson<TaxonInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.name)?;
    let item = TaxonomyRepo::create(&state.pool, taxonomy, &slug, &input).await?;
    tracing::info!(
        entity = taxonomy.entity(),
        id = item.id,
        user_id = auth.user_id,
        "Taxonomy term created"
    );
    Ok((StatusCode::CREATED, data(item)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(taxonomy): Extension<Taxonomy>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<TaxonInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.name)?;
    let item = TaxonomyRepo::update(&state.pool, taxonomy, id, &slug, &input)
        .await?
        .ok_or_else(|| not_found(taxonomy.entity(), id))?;
    tracing::info!(entity = taxonomy.entity(), id, user_id = auth.user_id, "Taxonomy term updated");
    Ok(data(item))
}

/// Deleting a category un-files its posts; deleting a tag unlinks it.
pub async fn delete(
    State(state): State<AppState>,
    Extension(taxonomy): Extension<Taxonomy>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = TaxonomyRepo::delete(&state.pool, taxonomy, id).await?;
    if removed {
        tracing::info!(
            entity = taxonomy.entity(),
            id,
            user_id = auth.user_id,
            "Taxonomy term deleted",
        );
    }
    deleted(removed, taxonomy.entity(), id)
}
