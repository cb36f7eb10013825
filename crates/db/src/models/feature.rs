//! Homepage feature tile models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, pick_opt, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::require_short_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub title: String,
    pub title_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a feature tile.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureInput {
    pub title: String,
    pub title_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl FeatureInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)
    }
}

impl Localize for Feature {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self.description = pick_opt(locale, self.description, &self.description_hi);
        self
    }
}
