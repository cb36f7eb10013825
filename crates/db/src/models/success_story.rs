//! Success story models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `success_stories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SuccessStory {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub title_hi: Option<String>,
    pub person_name: Option<String>,
    pub content: String,
    pub content_hi: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a success story. `slug` defaults from `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuccessStoryInput {
    pub slug: Option<String>,
    pub title: String,
    pub title_hi: Option<String>,
    pub person_name: Option<String>,
    pub content: String,
    pub content_hi: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl SuccessStoryInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)?;
        require_non_empty("content", &self.content)
    }
}

impl Localize for SuccessStory {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self.content = pick(locale, self.content, &self.content_hi);
        self
    }
}
