//! Repository for the `initiatives` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::initiative::{Initiative, InitiativeInput};
use super::ordering::{next_sort_order, Swappable};

const COLUMNS: &str = "id, slug, title, title_hi, description, description_hi, image_url, \
                       sort_order, created_at, updated_at";

pub struct InitiativeRepo;

impl InitiativeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Initiative>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM initiatives ORDER BY sort_order, id");
        sqlx::query_as::<_, Initiative>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Initiative>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM initiatives WHERE id = $1");
        sqlx::query_as::<_, Initiative>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an initiative under a pre-resolved `slug`.
    ///
    /// A missing `sort_order` places the row after every existing initiative.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        input: &InitiativeInput,
    ) -> Result<Initiative, sqlx::Error> {
        let sort_order = match input.sort_order {
            Some(order) => order,
            None => next_sort_order(pool, Swappable::Initiatives).await?,
        };
        let query = format!(
            "INSERT INTO initiatives
                (slug, title, title_hi, description, description_hi, image_url, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Initiative>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(&input.image_url)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Replace an initiative. A missing `sort_order` keeps the current position.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        slug: &str,
        input: &InitiativeInput,
    ) -> Result<Option<Initiative>, sqlx::Error> {
        let query = format!(
            "UPDATE initiatives SET
                slug = $2, title = $3, title_hi = $4, description = $5,
                description_hi = $6, image_url = $7, sort_order = COALESCE($8, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Initiative>(&query)
            .bind(id)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM initiatives WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
