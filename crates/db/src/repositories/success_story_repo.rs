//! Repository for the `success_stories` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::success_story::{SuccessStory, SuccessStoryInput};

const COLUMNS: &str = "id, slug, title, title_hi, person_name, content, content_hi, image_url, \
                       sort_order, created_at, updated_at";

pub struct SuccessStoryRepo;

impl SuccessStoryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<SuccessStory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM success_stories ORDER BY sort_order, id DESC");
        sqlx::query_as::<_, SuccessStory>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SuccessStory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM success_stories WHERE id = $1");
        sqlx::query_as::<_, SuccessStory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<SuccessStory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM success_stories WHERE slug = $1");
        sqlx::query_as::<_, SuccessStory>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        slug: &str,
        input: &SuccessStoryInput,
    ) -> Result<SuccessStory, sqlx::Error> {
        let query = format!(
            "INSERT INTO success_stories
                (slug, title, title_hi, person_name, content, content_hi, image_url, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuccessStory>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.person_name)
            .bind(&input.content)
            .bind(&input.content_hi)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        slug: &str,
        input: &SuccessStoryInput,
    ) -> Result<Option<SuccessStory>, sqlx::Error> {
        let query = format!(
            "UPDATE success_stories SET
                slug = $2, title = $3, title_hi = $4, person_name = $5, content = $6,
                content_hi = $7, image_url = $8, sort_order = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuccessStory>(&query)
            .bind(id)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.person_name)
            .bind(&input.content)
            .bind(&input.content_hi)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM success_stories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
