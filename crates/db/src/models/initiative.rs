//! Initiative (programme) models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `initiatives` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Initiative {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub title_hi: Option<String>,
    pub description: String,
    pub description_hi: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing an initiative. `slug` defaults from `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct InitiativeInput {
    pub slug: Option<String>,
    pub title: String,
    pub title_hi: Option<String>,
    pub description: String,
    pub description_hi: Option<String>,
    pub image_url: Option<String>,
    /// When omitted on create, the initiative goes to the end of the list.
    pub sort_order: Option<i32>,
}

impl InitiativeInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)?;
        require_non_empty("description", &self.description)
    }
}

impl Localize for Initiative {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self.description = pick(locale, self.description, &self.description_hi);
        self
    }
}
