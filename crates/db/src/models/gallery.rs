//! Photo gallery models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, pick_opt, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `galleries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gallery {
    pub id: DbId,
    pub title: String,
    pub title_hi: Option<String>,
    pub cover_image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `gallery_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub gallery_id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub caption_hi: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A gallery with its images, returned by `GET /galleries/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryDetail {
    #[serde(flatten)]
    pub gallery: Gallery,
    pub images: Vec<GalleryImage>,
}

/// DTO for creating or replacing a gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryInput {
    pub title: String,
    pub title_hi: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl GalleryInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)
    }
}

/// DTO for adding or replacing an image inside a gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryImageInput {
    pub image_url: String,
    pub caption: Option<String>,
    pub caption_hi: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl GalleryImageInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("image_url", &self.image_url)
    }
}

impl Localize for Gallery {
    fn localize(mut self, locale: Locale) -> Self {
        self.title = pick(locale, self.title, &self.title_hi);
        self
    }
}

impl Localize for GalleryImage {
    fn localize(mut self, locale: Locale) -> Self {
        self.caption = pick_opt(locale, self.caption, &self.caption_hi);
        self
    }
}

impl Localize for GalleryDetail {
    fn localize(self, locale: Locale) -> Self {
        Self {
            gallery: self.gallery.localize(locale),
            images: self.images.localize(locale),
        }
    }
}
