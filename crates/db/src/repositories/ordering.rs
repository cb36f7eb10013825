//! Manual ordering helpers shared by the sortable content tables.

use ngocms_core::types::DbId;
use sqlx::PgPool;

/// A table whose rows can be reordered by swapping one column between two rows.
///
/// Table and column names come from this closed set, never from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swappable {
    Initiatives,
    ElectronicMedia,
    /// News is ordered by publication date, so the dates are swapped.
    NewsArticles,
}

impl Swappable {
    fn table(self) -> &'static str {
        match self {
            Self::Initiatives => "initiatives",
            Self::ElectronicMedia => "electronic_media",
            Self::NewsArticles => "news_articles",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Initiatives | Self::ElectronicMedia => "sort_order",
            Self::NewsArticles => "published_on",
        }
    }
}

/// Swap the ordering column of two rows in one transaction.
///
/// Both rows are locked first. Returns `false` without changing anything if
/// either id does not exist.
pub async fn swap_order(
    pool: &PgPool,
    target: Swappable,
    first_id: DbId,
    second_id: DbId,
) -> Result<bool, sqlx::Error> {
    let table = target.table();
    let column = target.column();
    let mut tx = pool.begin().await?;

    let lock = format!("SELECT id FROM {table} WHERE id = ANY($1) ORDER BY id FOR UPDATE");
    let locked: Vec<DbId> = sqlx::query_scalar(&lock)
        .bind(vec![first_id, second_id])
        .fetch_all(&mut *tx)
        .await?;
    if locked.len() != 2 {
        tx.rollback().await?;
        return Ok(false);
    }

    // The self-join reads the pre-update values of both rows.
    let swap = format!(
        "UPDATE {table} AS t SET {column} = o.{column}
         FROM {table} AS o
         WHERE (t.id = $1 AND o.id = $2) OR (t.id = $2 AND o.id = $1)"
    );
    sqlx::query(&swap)
        .bind(first_id)
        .bind(second_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::debug!(table, first_id, second_id, "Swapped row order");
    Ok(true)
}

/// The next free `sort_order` value for `table` (max + 1, or 0 when empty).
pub(crate) async fn next_sort_order(pool: &PgPool, target: Swappable) -> Result<i32, sqlx::Error> {
    let query = format!(
        "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM {}",
        target.table()
    );
    sqlx::query_scalar::<_, i32>(&query).fetch_one(pool).await
}
