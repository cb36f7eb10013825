//! Award models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, pick_opt, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::require_short_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `awards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Award {
    pub id: DbId,
    pub title: String,
    pub title_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub image_url: Option<String>,
    pub year: Option<i32>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing an award.
#[derive(Debug, Clone, Deserialize)]
pub struct AwardInput {
    pub title: String,
    pub title_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub image_url: Option<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub sort_order: i32,
}

impl AwardInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)?;
        if let Some(year) = self.year {
            if !(1900..=2100).contains(&year) {
                return Err(CoreError::Validation(format!("year {year} is out of range")));
            }
        }
        Ok(())
    }
}

impl Localize for Award {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self.description = pick_opt(locale, self.description, &self.description_hi);
        self
    }
}
