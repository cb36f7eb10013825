//! Repository for blog categories and tags.
//!
//! Both tables share one row shape, so a single repository serves both,
//! selected by [`Taxonomy`].

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog::{BlogTaxon, TaxonInput};

const COLUMNS: &str = "id, name, name_hi, slug, created_at, updated_at";

/// Which taxonomy table to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Category,
    Tag,
}

impl Taxonomy {
    fn table(self) -> &'static str {
        match self {
            Self::Category => "blog_categories",
            Self::Tag => "blog_tags",
        }
    }

    /// Entity name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Category => "BlogCategory",
            Self::Tag => "BlogTag",
        }
    }
}

pub struct TaxonomyRepo;

impl TaxonomyRepo {
    pub async fn list(pool: &PgPool, taxonomy: Taxonomy) -> Result<Vec<BlogTaxon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY name, id", taxonomy.table());
        sqlx::query_as::<_, BlogTaxon>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        taxonomy: Taxonomy,
        id: DbId,
    ) -> Result<Option<BlogTaxon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", taxonomy.table());
        sqlx::query_as::<_, BlogTaxon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        taxonomy: Taxonomy,
        slug: &str,
        input: &TaxonInput,
    ) -> Result<BlogTaxon, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name, name_hi, slug)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}",
            taxonomy.table()
        );
        sqlx::query_as::<_, BlogTaxon>(&query)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        taxonomy: Taxonomy,
        id: DbId,
        slug: &str,
        input: &TaxonInput,
    ) -> Result<Option<BlogTaxon>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET name = $2, name_hi = $3, slug = $4
             WHERE id = $1
             RETURNING {COLUMNS}",
            taxonomy.table()
        );
        sqlx::query_as::<_, BlogTaxon>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, taxonomy: Taxonomy, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", taxonomy.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
