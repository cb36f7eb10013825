//! Repository for the `testimonials` table.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{Testimonial, TestimonialInput};

const COLUMNS: &str = "id, name, name_hi, designation, designation_hi, quote, quote_hi, image_url, \
                       sort_order, created_at, updated_at";

pub struct TestimonialRepo;

impl TestimonialRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY sort_order, id");
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &TestimonialInput,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials
                (name, name_hi, designation, designation_hi, quote, quote_hi, image_url, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(&input.designation)
            .bind(&input.designation_hi)
            .bind(&input.quote)
            .bind(&input.quote_hi)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TestimonialInput,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                name = $2, name_hi = $3, designation = $4, designation_hi = $5,
                quote = $6, quote_hi = $7, image_url = $8, sort_order = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_hi)
            .bind(&input.designation)
            .bind(&input.designation_hi)
            .bind(&input.quote)
            .bind(&input.quote_hi)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
