//! Site statistic ("10,000+ children reached") models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::require_short_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_statistics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteStatistic {
    pub id: DbId,
    pub label: String,
    pub label_hi: Option<String>,
    pub value: i64,
    pub suffix: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a statistic.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteStatisticInput {
    pub label: String,
    pub label_hi: Option<String>,
    pub value: i64,
    pub suffix: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl SiteStatisticInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("label", &self.label)?;
        if self.value < 0 {
            return Err(CoreError::Validation("value must not be negative".into()));
        }
        Ok(())
    }
}

impl Localize for SiteStatistic {
    fn localize(mut self, locale: Locale) -> Self {
        self.label = pick(locale, self.label, &self.label_hi);
        self
    }
}
