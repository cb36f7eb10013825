//! Career (job opening) models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, Locale, Localize};
use ngocms_core::types::{Date, DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::banner::default_true;

/// Accepted `employment_type` values.
pub const EMPLOYMENT_TYPES: &[&str] = &[
    "full-time",
    "part-time",
    "contract",
    "internship",
    "volunteer",
];

/// A row from the `careers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Career {
    pub id: DbId,
    pub title: String,
    pub title_hi: Option<String>,
    pub department: Option<String>,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub description_hi: Option<String>,
    pub apply_by: Option<Date>,
    pub is_open: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a career opening.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerInput {
    pub title: String,
    pub title_hi: Option<String>,
    pub department: Option<String>,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub description_hi: Option<String>,
    pub apply_by: Option<Date>,
    #[serde(default = "default_true")]
    pub is_open: bool,
}

impl CareerInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)?;
        require_short_text("location", &self.location)?;
        require_non_empty("description", &self.description)?;
        if !EMPLOYMENT_TYPES.contains(&self.employment_type.as_str()) {
            return Err(CoreError::Validation(format!(
                "Invalid employment_type '{}'. Must be one of: {}",
                self.employment_type,
                EMPLOYMENT_TYPES.join(", ")
            )));
        }
        Ok(())
    }
}

/// Query parameters for `GET /careers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerListParams {
    pub locale: Option<Locale>,
    /// Include closed openings (honoured for signed-in users only).
    #[serde(default)]
    pub include_closed: bool,
}

impl Localize for Career {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self.description = pick(locale, self.description, &self.description_hi);
        self
    }
}
