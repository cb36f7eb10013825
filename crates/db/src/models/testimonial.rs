//! Testimonial models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, pick_opt, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub name_hi: Option<String>,
    pub designation: Option<String>,
    pub designation_hi: Option<String>,
    pub quote: String,
    pub quote_hi: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialInput {
    pub name: String,
    pub name_hi: Option<String>,
    pub designation: Option<String>,
    pub designation_hi: Option<String>,
    pub quote: String,
    pub quote_hi: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl TestimonialInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("name", &self.name)?;
        require_non_empty("quote", &self.quote)
    }
}

impl Localize for Testimonial {
    fn localize(mut self, locale: Locale) -> Self {
        self.name = pick(locale, self.name, &self.name_hi);
        self.designation = pick_opt(locale, self.designation, &self.designation_hi);
        self.quote = pick(locale, self.quote, &self.quote_hi);
        self
    }
}
