//! Repository for the `page_views` table.

use sqlx::PgPool;

use crate::models::page_view::{AnalyticsSummary, PageView, PathViews, RecordPageView};

/// Number of paths reported in [`AnalyticsSummary::top_pages`].
const TOP_PAGES: i64 = 10;

pub struct PageViewRepo;

impl PageViewRepo {
    pub async fn record(
        pool: &PgPool,
        input: &RecordPageView,
        user_agent: Option<&str>,
    ) -> Result<PageView, sqlx::Error> {
        sqlx::query_as::<_, PageView>(
            "INSERT INTO page_views (path, visitor_id, referrer, user_agent)
             VALUES ($1, $2, $3, $4)
             RETURNING id, path, visitor_id, referrer, user_agent, viewed_at",
        )
        .bind(&input.path)
        .bind(input.visitor_id)
        .bind(&input.referrer)
        .bind(user_agent)
        .fetch_one(pool)
        .await
    }

    /// Aggregate the last `days` days of traffic.
    pub async fn summary(pool: &PgPool, days: i32) -> Result<AnalyticsSummary, sqlx::Error> {
        let (total_views, unique_visitors): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(DISTINCT visitor_id)
             FROM page_views
             WHERE viewed_at >= NOW() - make_interval(days => $1)",
        )
        .bind(days)
        .fetch_one(pool)
        .await?;

        let top_pages = sqlx::query_as::<_, PathViews>(
            "SELECT path, COUNT(*) AS views
             FROM page_views
             WHERE viewed_at >= NOW() - make_interval(days => $1)
             GROUP BY path
             ORDER BY views DESC, path
             LIMIT $2",
        )
        .bind(days)
        .bind(TOP_PAGES)
        .fetch_all(pool)
        .await?;

        Ok(AnalyticsSummary {
            days,
            total_views,
            unique_visitors,
            top_pages,
        })
    }
}
