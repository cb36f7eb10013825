//! News article (press coverage) models and DTOs.
//!
//! News is ordered by `published_on`; reordering swaps the dates of two
//! articles.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, pick_opt, Locale, Localize};
use ngocms_core::types::{Date, DbId, Timestamp};
use ngocms_core::validation::require_short_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `news_articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsArticle {
    pub id: DbId,
    pub title: String,
    pub title_hi: Option<String>,
    pub summary: Option<String>,
    pub summary_hi: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub published_on: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a news article.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticleInput {
    pub title: String,
    pub title_hi: Option<String>,
    pub summary: Option<String>,
    pub summary_hi: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to today when omitted.
    pub published_on: Option<Date>,
}

impl NewsArticleInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)
    }
}

impl Localize for NewsArticle {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self.summary = pick_opt(locale, self.summary, &self.summary_hi);
        self
    }
}
