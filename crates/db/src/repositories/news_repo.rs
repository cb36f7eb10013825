//! Repository for the `news_articles` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::news::{NewsArticle, NewsArticleInput};

const COLUMNS: &str = "id, title, title_hi, summary, summary_hi, source, url, image_url, \
                       published_on, created_at, updated_at";

pub struct NewsRepo;

impl NewsRepo {
    /// Newest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NewsArticle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_articles
             ORDER BY published_on DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsArticle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_articles WHERE id = $1");
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an article; `published_on` falls back to the current date.
    pub async fn create(
        pool: &PgPool,
        input: &NewsArticleInput,
    ) -> Result<NewsArticle, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_articles
                (title, title_hi, summary, summary_hi, source, url, image_url, published_on)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.summary)
            .bind(&input.summary_hi)
            .bind(&input.source)
            .bind(&input.url)
            .bind(&input.image_url)
            .bind(input.published_on)
            .fetch_one(pool)
            .await
    }

    /// Replace an article. A missing `published_on` keeps the stored date.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewsArticleInput,
    ) -> Result<Option<NewsArticle>, sqlx::Error> {
        let query = format!(
            "UPDATE news_articles SET
                title = $2, title_hi = $3, summary = $4, summary_hi = $5, source = $6,
                url = $7, image_url = $8, published_on = COALESCE($9, published_on)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.summary)
            .bind(&input.summary_hi)
            .bind(&input.source)
            .bind(&input.url)
            .bind(&input.image_url)
            .bind(input.published_on)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
