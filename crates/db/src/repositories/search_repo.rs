//! Unified search, delegated to the `search_content` database function.

use ngocms_core::locale::Locale;
use sqlx::PgPool;

use crate::models::search::SearchHit;

pub struct SearchRepo;

impl SearchRepo {
    /// Best matches first across blogs, news, initiatives, success stories and open careers.
    pub async fn search(
        pool: &PgPool,
        query: &str,
        locale: Locale,
        limit: i64,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        sqlx::query_as::<_, SearchHit>(
            "SELECT entity_type, entity_id, title, snippet, score
             FROM search_content($1, $2, $3)",
        )
        .bind(query)
        .bind(locale.as_str())
        .bind(limit as i32)
        .fetch_all(pool)
        .await
    }
}
