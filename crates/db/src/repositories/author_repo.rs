//! Repository for the `authors` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog::{Author, AuthorInput};

const COLUMNS: &str = "id, name, name_hi, bio, bio_hi, avatar_url, created_at, updated_at";

pub struct AuthorRepo;

impl AuthorRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY name, id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &AuthorInput) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, name_hi, bio, bio_hi, avatar_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(&input.bio)
            .bind(&input.bio_hi)
            .bind(&input.avatar_url)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AuthorInput,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE authors SET
                name = $2, name_hi = $3, bio = $4, bio_hi = $5, avatar_url = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(&input.bio)
            .bind(&input.bio_hi)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    /// Fails with a foreign-key violation while the author still owns posts.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
