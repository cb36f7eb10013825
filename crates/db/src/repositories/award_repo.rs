//! Repository for the `awards` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::award::{Award, AwardInput};

const COLUMNS: &str = "id, title, title_hi, description, description_hi, image_url, \
                       year, sort_order, created_at, updated_at";

pub struct AwardRepo;

impl AwardRepo {
    /// List all awards, most recent year first within each sort position.
    pub async fn list(pool: &PgPool) -> Result<Vec<Award>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM awards ORDER BY sort_order, year DESC NULLS LAST, id"
        );
        sqlx::query_as::<_, Award>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Award>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM awards WHERE id = $1");
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &AwardInput) -> Result<Award, sqlx::Error> {
        let query = format!(
            "INSERT INTO awards (title, title_hi, description, description_hi, image_url, year, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(&input.image_url)
            .bind(input.year)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable field. Returns `None` if the award does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AwardInput,
    ) -> Result<Option<Award>, sqlx::Error> {
        let query = format!(
            "UPDATE awards SET
                title = $2, title_hi = $3, description = $4, description_hi = $5,
                image_url = $6, year = $7, sort_order = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(&input.image_url)
            .bind(input.year)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM awards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
