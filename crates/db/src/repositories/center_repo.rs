//! Repository for the `centers` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::center::{Center, CenterInput};

const COLUMNS: &str = "id, name, name_hi, address, address_hi, city, state, phone, email, \
                       latitude, longitude, sort_order, created_at, updated_at";

pub struct CenterRepo;

impl CenterRepo {
    /// List centers, optionally restricted to one state (case-insensitive).
    pub async fn list(pool: &PgPool, state: Option<&str>) -> Result<Vec<Center>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM centers
             WHERE $1::TEXT IS NULL OR lower(state) = lower($1)
             ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, Center>(&query)
            .bind(state)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Center>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM centers WHERE id = $1");
        sqlx::query_as::<_, Center>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CenterInput) -> Result<Center, sqlx::Error> {
        let query = format!(
            "INSERT INTO centers
                (name, name_hi, address, address_hi, city, state, phone, email,
                 latitude, longitude, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Center>(&query)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(&input.address)
            .bind(&input.address_hi)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CenterInput,
    ) -> Result<Option<Center>, sqlx::Error> {
        let query = format!(
            "UPDATE centers SET
                name = $2, name_hi = $3, address = $4, address_hi = $5, city = $6, state = $7,
                phone = $8, email = $9, latitude = $10, longitude = $11, sort_order = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Center>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(&input.address)
            .bind(&input.address_hi)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM centers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
