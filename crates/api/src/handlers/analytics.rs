//! Handlers for first-party page-view analytics.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use ngocms_db::models::page_view::RecordPageView;
use ngocms_db::repositories::PageViewRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::data;
use crate::state::AppState;

const DEFAULT_SUMMARY_DAYS: i32 = 30;
const MAX_SUMMARY_DAYS: i32 = 365;

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub days: Option<i32>,
}

/// POST /api/analytics/page-views
pub async fn record_page_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(input): AppJson<RecordPageView>,
) -> AppResult<StatusCode> {
    input.validate()?;
    let user_agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());
    PageViewRepo::record(&state.pool, &input, user_agent).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/analytics/summary?days=30
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<SummaryParams>,
) -> AppResult<impl IntoResponse> {
    let days = params
        .days
        .unwrap_or(DEFAULT_SUMMARY_DAYS)
        .clamp(1, MAX_SUMMARY_DAYS);
    let summary = PageViewRepo::summary(&state.pool, days).await?;
    Ok(data(summary))
}
