//! Repository for the `electronic_media` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::electronic_media::{ElectronicMedia, ElectronicMediaInput};
use super::ordering::{next_sort_order, Swappable};

const COLUMNS: &str =
    "id, title, title_hi, video_url, thumbnail_url, sort_order, created_at, updated_at";

pub struct ElectronicMediaRepo;

impl ElectronicMediaRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<ElectronicMedia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM electronic_media ORDER BY sort_order, id");
        sqlx::query_as::<_, ElectronicMedia>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ElectronicMedia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM electronic_media WHERE id = $1");
        sqlx::query_as::<_, ElectronicMedia>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &ElectronicMediaInput,
    ) -> Result<ElectronicMedia, sqlx::Error> {
        let sort_order = match input.sort_order {
            Some(order) => order,
            None => next_sort_order(pool, Swappable::ElectronicMedia).await?,
        };
        let query = format!(
            "INSERT INTO electronic_media (title, title_hi, video_url, thumbnail_url, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ElectronicMedia>(&query)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ElectronicMediaInput,
    ) -> Result<Option<ElectronicMedia>, sqlx::Error> {
        let query = format!(
            "UPDATE electronic_media SET
                title = $2, title_hi = $3, video_url = $4, thumbnail_url = $5,
                sort_order = COALESCE($6, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ElectronicMedia>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM electronic_media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
