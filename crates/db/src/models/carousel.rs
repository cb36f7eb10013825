//! Carousel slide models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, pick_opt, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::banner::default_true;

/// A row from the `carousels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Carousel {
    pub id: DbId,
    pub title: String,
    pub title_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a carousel slide.
#[derive(Debug, Clone, Deserialize)]
pub struct CarouselInput {
    pub title: String,
    pub title_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl CarouselInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)?;
        require_non_empty("image_url", &self.image_url)
    }
}

impl Localize for Carousel {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self.description = pick_opt(locale, self.description, &self.description_hi);
        self
    }
}
