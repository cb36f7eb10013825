//! Repository for the `features` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::{Feature, FeatureInput};

const COLUMNS: &str = "id, title, title_hi, description, description_hi, icon, sort_order, \
                       created_at, updated_at";

pub struct FeatureRepo;

impl FeatureRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features ORDER BY sort_order, id");
        sqlx::query_as::<_, Feature>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features WHERE id = $1");
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &FeatureInput) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features (title, title_hi, description, description_hi, icon, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FeatureInput,
    ) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!(
            "UPDATE features SET
                title = $2, title_hi = $3, description = $4, description_hi = $5,
                icon = $6, sort_order = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
