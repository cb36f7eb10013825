//! Repository for the `site_statistics` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_statistic::{SiteStatistic, SiteStatisticInput};

const COLUMNS: &str = "id, label, label_hi, value, suffix, sort_order, created_at, updated_at";

pub struct SiteStatisticRepo;

impl SiteStatisticRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteStatistic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_statistics ORDER BY sort_order, id");
        sqlx::query_as::<_, SiteStatistic>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SiteStatistic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_statistics WHERE id = $1");
        sqlx::query_as::<_, SiteStatistic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &SiteStatisticInput,
    ) -> Result<SiteStatistic, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_statistics (label, label_hi, value, suffix, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteStatistic>(&query)
            .bind(&input.label)
            .bind(&input.label_hi)
            .bind(input.value)
            .bind(&input.suffix)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SiteStatisticInput,
    ) -> Result<Option<SiteStatistic>, sqlx::Error> {
        let query = format!(
            "UPDATE site_statistics SET
                label = $2, label_hi = $3, value = $4, suffix = $5, sort_order = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteStatistic>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.label_hi)
            .bind(input.value)
            .bind(&input.suffix)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_statistics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
