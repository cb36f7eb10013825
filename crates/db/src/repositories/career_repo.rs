//! Repository for the `careers` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::career::{Career, CareerInput};

const COLUMNS: &str = "id, title, title_hi, department, location, employment_type, description, \
                       description_hi, apply_by, is_open, created_at, updated_at";

pub struct CareerRepo;

impl CareerRepo {
    /// List openings, newest first. Closed openings appear only when requested.
    pub async fn list(pool: &PgPool, include_closed: bool) -> Result<Vec<Career>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM careers
             WHERE is_open OR $1
             ORDER BY is_open DESC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Career>(&query)
            .bind(include_closed)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Career>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM careers WHERE id = $1");
        sqlx::query_as::<_, Career>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CareerInput) -> Result<Career, sqlx::Error> {
        let query = format!(
            "INSERT INTO careers
                (title, title_hi, department, location, employment_type, description,
                 description_hi, apply_by, is_open)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Career>(&query)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.department)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(input.apply_by)
            .bind(input.is_open)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CareerInput,
    ) -> Result<Option<Career>, sqlx::Error> {
        let query = format!(
            "UPDATE careers SET
                title = $2, title_hi = $3, department = $4, location = $5,
                employment_type = $6, description = $7, description_hi = $8,
                apply_by = $9, is_open = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Career>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.department)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(&input.description_hi)
            .bind(input.apply_by)
            .bind(input.is_open)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM careers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
