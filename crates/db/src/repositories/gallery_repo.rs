//! Repository for the `galleries` and `gallery_images` tables.

use ngocms_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{Gallery, GalleryDetail, GalleryImage, GalleryImageInput, GalleryInput};

const COLUMNS: &str = "id, title, title_hi, cover_image_url, sort_order, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, gallery_id, image_url, caption, caption_hi, sort_order, \
                             created_at, updated_at";

pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries ORDER BY sort_order, id DESC");
        sqlx::query_as::<_, Gallery>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE id = $1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a gallery together with its images in display order.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryDetail>, sqlx::Error> {
        let Some(gallery) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let images = Self::list_images(pool, id).await?;
        Ok(Some(GalleryDetail { gallery, images }))
    }

    pub async fn create(pool: &PgPool, input: &GalleryInput) -> Result<Gallery, sqlx::Error> {
        let query = format!(
            "INSERT INTO galleries (title, title_hi, cover_image_url, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.cover_image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GalleryInput,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET
                title = $2, title_hi = $3, cover_image_url = $4, sort_order = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_hi)
            .bind(&input.cover_image_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Deleting a gallery cascades to its images.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Images
    // -----------------------------------------------------------------------

    pub async fn list_images(
        pool: &PgPool,
        gallery_id: DbId,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM gallery_images
             WHERE gallery_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(gallery_id)
            .fetch_all(pool)
            .await
    }

    /// Add an image. The caller checks the gallery exists; a dangling
    /// `gallery_id` surfaces as a foreign-key violation.
    pub async fn add_image(
        pool: &PgPool,
        gallery_id: DbId,
        input: &GalleryImageInput,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_images (gallery_id, image_url, caption, caption_hi, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(gallery_id)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(&input.caption_hi)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Replace an image. Scoped to `gallery_id` so a mismatched pair is `None`.
    pub async fn update_image(
        pool: &PgPool,
        gallery_id: DbId,
        image_id: DbId,
        input: &GalleryImageInput,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_images SET
                image_url = $3, caption = $4, caption_hi = $5, sort_order = $6
             WHERE id = $2 AND gallery_id = $1
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(gallery_id)
            .bind(image_id)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(&input.caption_hi)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_image(
        pool: &PgPool,
        gallery_id: DbId,
        image_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $2 AND gallery_id = $1")
            .bind(gallery_id)
            .bind(image_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
