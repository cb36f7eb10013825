//! Repository for the `enquiries` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::enquiry::{CreateEnquiry, Enquiry};

const COLUMNS: &str =
    "id, name, email, phone, subject, message, is_resolved, created_at, updated_at";

pub struct EnquiryRepo;

impl EnquiryRepo {
    pub async fn create(pool: &PgPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries (name, email, phone, subject, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries WHERE id = $1");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Newest first, optionally filtered by resolution state.
    pub async fn list(
        pool: &PgPool,
        is_resolved: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enquiries
             WHERE $1::BOOLEAN IS NULL OR is_resolved = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(is_resolved)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn set_resolved(
        pool: &PgPool,
        id: DbId,
        is_resolved: bool,
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE enquiries SET is_resolved = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .bind(is_resolved)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
