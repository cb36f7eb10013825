//! Unified search result row (returned by the `search_content` SQL function).

use ngocms_core::locale::Locale;
use ngocms_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchHit {
    pub entity_type: String,
    pub entity_id: DbId,
    pub title: String,
    pub snippet: Option<String>,
    pub score: f32,
}

/// Query parameters for `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub locale: Option<Locale>,
    pub limit: Option<i64>,
}
