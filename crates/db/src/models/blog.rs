//! Blog models and DTOs: posts plus their authors, categories, and tags.
//!
//! Unlike the other content types, a blog post is written in a single
//! locale (`blogs.locale`) and the slug is unique per locale. Authors and
//! taxonomy carry the usual `*_hi` locale field pairs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, pick_opt, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{require_non_empty, require_short_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Draft posts are visible only to signed-in editors.
pub const BLOG_STATUS_DRAFT: &str = "draft";
/// Published posts are visible on the public site.
pub const BLOG_STATUS_PUBLISHED: &str = "published";

const VALID_BLOG_STATUSES: &[&str] = &[BLOG_STATUS_DRAFT, BLOG_STATUS_PUBLISHED];

/// Validate a blog status value.
pub fn validate_blog_status(status: &str) -> Result<(), CoreError> {
    if VALID_BLOG_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: draft, published"
        )))
    }
}

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub name_hi: Option<String>,
    pub bio: Option<String>,
    pub bio_hi: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `blog_categories` or `blog_tags` (identical shapes).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogTaxon {
    pub id: DbId,
    pub name: String,
    pub name_hi: Option<String>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Blog {
    pub id: DbId,
    pub locale: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub author_id: DbId,
    pub category_id: Option<DbId>,
    pub status: String,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A blog post together with its author, category, and tags.
#[derive(Debug, Clone, Serialize)]
pub struct BlogDetail {
    #[serde(flatten)]
    pub blog: Blog,
    pub author: Option<Author>,
    pub category: Option<BlogTaxon>,
    pub tags: Vec<BlogTaxon>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating or replacing an author.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorInput {
    pub name: String,
    pub name_hi: Option<String>,
    pub bio: Option<String>,
    pub bio_hi: Option<String>,
    pub avatar_url: Option<String>,
}

impl AuthorInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("name", &self.name)
    }
}

/// DTO for creating or replacing a category or tag.
///
/// `slug` is generated from `name` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonInput {
    pub name: String,
    pub name_hi: Option<String>,
    pub slug: Option<String>,
}

impl TaxonInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("name", &self.name)
    }
}

/// DTO for creating or replacing a blog post.
///
/// `tag_ids` replaces the full tag set on every write.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogInput {
    #[serde(default)]
    pub locale: Locale,
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub author_id: DbId,
    pub category_id: Option<DbId>,
    #[serde(default = "default_blog_status")]
    pub status: String,
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}

fn default_blog_status() -> String {
    BLOG_STATUS_DRAFT.to_string()
}

impl BlogInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("title", &self.title)?;
        require_non_empty("content", &self.content)?;
        validate_blog_status(&self.status)
    }
}

/// Query parameters for `GET /blogs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListParams {
    pub locale: Option<Locale>,
    pub status: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    /// Tag slug.
    pub tag: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Localization
// ---------------------------------------------------------------------------

impl Localize for Author {
    fn localize(mut self, locale: Locale) -> Self {
        self.name = pick(locale, self.name, &self.name_hi);
        self.bio = pick_opt(locale, self.bio, &self.bio_hi);
        self
    }
}

impl Localize for BlogTaxon {
    fn localize(mut self, locale: Locale) -> Self {
        self.name = pick(locale, self.name, &self.name_hi);
        self
    }
}

impl Localize for BlogDetail {
    fn localize(mut self, locale: Locale) -> Self {
        self.author = self.author.map(|a| a.localize(locale));
        self.category = self.category.map(|c| c.localize(locale));
        self.tags = self.tags.localize(locale);
        self
    }
}
