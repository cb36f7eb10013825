//! Repository for the `join_applications` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::join_application::{CreateJoinApplication, JoinApplication};

const COLUMNS: &str = "id, name, email, phone, area_of_interest, message, resume_url, status, \
                       created_at, updated_at";

pub struct JoinApplicationRepo;

impl JoinApplicationRepo {
    /// Store a public submission with status `new`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJoinApplication,
    ) -> Result<JoinApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO join_applications
                (name, email, phone, area_of_interest, message, resume_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JoinApplication>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(&input.phone)
            .bind(&input.area_of_interest)
            .bind(&input.message)
            .bind(&input.resume_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JoinApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM join_applications WHERE id = $1");
        sqlx::query_as::<_, JoinApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JoinApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM join_applications
             WHERE $1::TEXT IS NULL OR status = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, JoinApplication>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<JoinApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE join_applications SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JoinApplication>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM join_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
