//! Repository for the `banners` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::banner::{Banner, BannerInput};

const COLUMNS: &str = "id, title, title_hi, subtitle, subtitle_hi, image_url, link_url, \
                       is_active, sort_order, created_at, updated_at";

pub struct BannerRepo;

impl BannerRepo {
    /// List banners in display order. Inactive banners are included only on request.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banners
             WHERE is_active OR $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE id = $1");
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &BannerInput) -> Result<Banner, sqlx::Error> {
        let query = format!(
            "INSERT INTO banners
                (title, title_hi, subtitle, subtitle_hi, image_url, link_url, is_active, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.subtitle)
            .bind(&input.subtitle_hi)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &BannerInput,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!(
            "UPDATE banners SET
                title = $2, title_hi = $3, subtitle = $4, subtitle_hi = $5,
                image_url = $6, link_url = $7, is_active = $8, sort_order = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.subtitle)
            .bind(&input.subtitle_hi)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
