//! Repository for the `blogs` table and its tag links.

use ngocms_core::locale::Locale;
use ngocms_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::blog::{Blog, BlogDetail, BlogInput, BlogTaxon};
use super::author_repo::AuthorRepo;
use super::taxonomy_repo::{Taxonomy, TaxonomyRepo};

const COLUMNS: &str = "id, locale, slug, title, excerpt, content, cover_image_url, author_id, \
                       category_id, status, published_at, created_at, updated_at";

/// `COLUMNS` qualified with the `b.` alias for joined queries.
const QUALIFIED_COLUMNS: &str = "b.id, b.locale, b.slug, b.title, b.excerpt, b.content, \
                                 b.cover_image_url, b.author_id, b.category_id, b.status, \
                                 b.published_at, b.created_at, b.updated_at";

/// Filters accepted by [`BlogRepo::list`]. Slugs refer to category / tag slugs.
#[derive(Debug, Clone, Default)]
pub struct BlogFilter<'a> {
    pub locale: Option<Locale>,
    pub status: Option<&'a str>,
    pub category: Option<&'a str>,
    pub tag: Option<&'a str>,
}

pub struct BlogRepo;

impl BlogRepo {
    /// Insert a post and its tag links in one transaction.
    ///
    /// `published_at` is stamped when the post is created as published.
    pub async fn create(pool: &PgPool, slug: &str, input: &BlogInput) -> Result<Blog, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO blogs
                (locale, slug, title, excerpt, content, cover_image_url, author_id,
                 category_id, status, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9,
                     CASE WHEN $9 = 'published' THEN NOW() END)
             RETURNING {COLUMNS}"
        );
        let blog = sqlx::query_as::<_, Blog>(&query)
            .bind(input.locale.as_str())
            .bind(slug)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.cover_image_url)
            .bind(input.author_id)
            .bind(input.category_id)
            .bind(&input.status)
            .fetch_one(&mut *tx)
            .await?;
        replace_tags(&mut tx, blog.id, &input.tag_ids).await?;
        tx.commit().await?;
        Ok(blog)
    }

    /// Replace a post and its tag set.
    ///
    /// `published_at` is kept across edits of a published post, set on the
    /// first transition to published, and cleared when moved back to draft.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        slug: &str,
        input: &BlogInput,
    ) -> Result<Option<Blog>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE blogs SET
                locale = $2, slug = $3, title = $4, excerpt = $5, content = $6,
                cover_image_url = $7, author_id = $8, category_id = $9, status = $10,
                published_at = CASE
                    WHEN $10 = 'published' THEN COALESCE(published_at, NOW())
                    ELSE NULL
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let blog = sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .bind(input.locale.as_str())
            .bind(slug)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.cover_image_url)
            .bind(input.author_id)
            .bind(input.category_id)
            .bind(&input.status)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(blog) = blog else {
            tx.rollback().await?;
            return Ok(None);
        };
        replace_tags(&mut tx, blog.id, &input.tag_ids).await?;
        tx.commit().await?;
        Ok(Some(blog))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE slug = $1 AND locale = $2");
        sqlx::query_as::<_, Blog>(&query)
            .bind(slug)
            .bind(locale.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Expand a post with its author, category, and tags.
    pub async fn detail(pool: &PgPool, blog: Blog) -> Result<BlogDetail, sqlx::Error> {
        let author = AuthorRepo::find_by_id(pool, blog.author_id).await?;
        let category = match blog.category_id {
            Some(category_id) => {
                TaxonomyRepo::find_by_id(pool, Taxonomy::Category, category_id).await?
            }
            None => None,
        };
        let tags = Self::tags_for(pool, blog.id).await?;
        Ok(BlogDetail {
            blog,
            author,
            category,
            tags,
        })
    }

    pub async fn tags_for(pool: &PgPool, blog_id: DbId) -> Result<Vec<BlogTaxon>, sqlx::Error> {
        sqlx::query_as::<_, BlogTaxon>(
            "SELECT t.id, t.name, t.name_hi, t.slug, t.created_at, t.updated_at
             FROM blog_tags t
             JOIN blog_tag_links l ON l.tag_id = t.id
             WHERE l.blog_id = $1
             ORDER BY t.name, t.id",
        )
        .bind(blog_id)
        .fetch_all(pool)
        .await
    }

    /// List posts, newest first (published date, then creation date).
    pub async fn list(
        pool: &PgPool,
        filter: &BlogFilter<'_>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Blog>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}
             FROM blogs b
             LEFT JOIN blog_categories c ON c.id = b.category_id
             WHERE ($1::TEXT IS NULL OR b.locale = $1)
               AND ($2::TEXT IS NULL OR b.status = $2)
               AND ($3::TEXT IS NULL OR c.slug = $3)
               AND ($4::TEXT IS NULL OR EXISTS (
                    SELECT 1 FROM blog_tag_links l
                    JOIN blog_tags t ON t.id = l.tag_id
                    WHERE l.blog_id = b.id AND t.slug = $4))
             ORDER BY b.published_at DESC NULLS LAST, b.created_at DESC, b.id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(filter.locale.map(Locale::as_str))
            .bind(filter.status)
            .bind(filter.category)
            .bind(filter.tag)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Replace the tag set of `blog_id`. Unknown tag ids fail the foreign key.
async fn replace_tags(
    tx: &mut Transaction<'_, Postgres>,
    blog_id: DbId,
    tag_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM blog_tag_links WHERE blog_id = $1")
        .bind(blog_id)
        .execute(&mut **tx)
        .await?;
    if tag_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO blog_tag_links (blog_id, tag_id)
         SELECT $1, tag_id FROM UNNEST($2::BIGINT[]) AS tag_id
         ON CONFLICT DO NOTHING",
    )
    .bind(blog_id)
    .bind(tag_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
