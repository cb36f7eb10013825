//! First-party page-view analytics.

use ngocms_core::error::CoreError;
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::validate_max_len;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Longest path accepted for tracking.
const MAX_PATH_LEN: usize = 2048;

/// A row from the `page_views` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageView {
    pub id: DbId,
    pub path: String,
    pub visitor_id: Uuid,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub viewed_at: Timestamp,
}

/// Body of `POST /analytics/page-views`.
///
/// `visitor_id` is a client-generated anonymous id kept in local storage.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPageView {
    pub path: String,
    pub visitor_id: Uuid,
    pub referrer: Option<String>,
}

impl RecordPageView {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.path.starts_with('/') {
            return Err(CoreError::Validation("path must start with '/'".into()));
        }
        validate_max_len("path", &self.path, MAX_PATH_LEN)
    }
}

/// Views per path, used in [`AnalyticsSummary::top_pages`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PathViews {
    pub path: String,
    pub views: i64,
}

/// Aggregate returned by `GET /analytics/summary`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub days: i32,
    pub total_views: i64,
    pub unique_visitors: i64,
    pub top_pages: Vec<PathViews>,
}
