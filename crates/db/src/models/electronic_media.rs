//! Electronic media (TV / video coverage) models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `electronic_media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ElectronicMedia {
    pub id: DbId,
    pub title: String,
    pub title_hi: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing an electronic media entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ElectronicMediaInput {
    pub title: String,
    pub title_hi: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    /// When omitted on create, the entry goes to the end of the list.
    pub sort_order: Option<i32>,
}

impl ElectronicMediaInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)?;
        require_non_empty("video_url", &self.video_url)
    }
}

impl Localize for ElectronicMedia {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self
    }
}
