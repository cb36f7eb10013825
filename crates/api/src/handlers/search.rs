//! Unified site search.

use axum::extract::State;
use axum::response::IntoResponse;
use ngocms_core::locale::Locale;
use ngocms_core::pagination::{clamp_limit, DEFAULT_LIMIT, MAX_LIMIT};
use ngocms_db::models::search::SearchParams;
use ngocms_db::repositories::SearchRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::response::data;
use crate::state::AppState;

/// GET /api/search?q=&locale=&limit=
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'q' is required".into()))?;
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let locale = params.locale.unwrap_or(Locale::En);

    let hits = SearchRepo::search(&state.pool, query, locale, limit).await?;
    Ok(data(hits))
}
