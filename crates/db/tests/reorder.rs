//! Integration tests for the two-row ordering swap.

use chrono::NaiveDate;
use ngocms_db::models::initiative::InitiativeInput;
use ngocms_db::models::news::NewsArticleInput;
use ngocms_db::repositories::{swap_order, InitiativeRepo, NewsRepo, Swappable};
use sqlx::PgPool;

fn initiative(title: &str, sort_order: Option<i32>) -> InitiativeInput {
    InitiativeInput {
        slug: None,
        title: title.to_string(),
        title_hi: None,
        description: "Programme description".to_string(),
        description_hi: None,
        image_url: None,
        sort_order,
    }
}

fn news(title: &str, published_on: NaiveDate) -> NewsArticleInput {
    NewsArticleInput {
        title: title.to_string(),
        title_hi: None,
        summary: None,
        summary_hi: None,
        source: None,
        url: None,
        image_url: None,
        published_on: Some(published_on),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_sort_order_appends(pool: PgPool) {
    let first = InitiativeRepo::create(&pool, "first", &initiative("First", None))
        .await
        .unwrap();
    let second = InitiativeRepo::create(&pool, "second", &initiative("Second", Some(7)))
        .await
        .unwrap();
    let third = InitiativeRepo::create(&pool, "third", &initiative("Third", None))
        .await
        .unwrap();

    assert_eq!(first.sort_order, 0);
    assert_eq!(second.sort_order, 7);
    assert_eq!(third.sort_order, 8);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_swap_initiatives(pool: PgPool) {
    let a = InitiativeRepo::create(&pool, "a", &initiative("A", Some(1)))
        .await
        .unwrap();
    let b = InitiativeRepo::create(&pool, "b", &initiative("B", Some(2)))
        .await
        .unwrap();

    assert!(swap_order(&pool, Swappable::Initiatives, a.id, b.id).await.unwrap());

    let a = InitiativeRepo::find_by_id(&pool, a.id).await.unwrap().unwrap();
    let b = InitiativeRepo::find_by_id(&pool, b.id).await.unwrap().unwrap();
    assert_eq!(a.sort_order, 2);
    assert_eq!(b.sort_order, 1);

    let listed: Vec<_> = InitiativeRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.slug)
        .collect();
    assert_eq!(listed, vec!["b", "a"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_swap_with_missing_row_changes_nothing(pool: PgPool) {
    let a = InitiativeRepo::create(&pool, "only", &initiative("Only", Some(3)))
        .await
        .unwrap();

    assert!(!swap_order(&pool, Swappable::Initiatives, a.id, 999_999).await.unwrap());

    let a = InitiativeRepo::find_by_id(&pool, a.id).await.unwrap().unwrap();
    assert_eq!(a.sort_order, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_swap_news_exchanges_publication_dates(pool: PgPool) {
    let older_date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let newer_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let older = NewsRepo::create(&pool, &news("Older", older_date)).await.unwrap();
    let newer = NewsRepo::create(&pool, &news("Newer", newer_date)).await.unwrap();

    assert!(swap_order(&pool, Swappable::NewsArticles, older.id, newer.id).await.unwrap());

    let listed = NewsRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(listed[0].id, older.id);
    assert_eq!(listed[0].published_on, newer_date);
    assert_eq!(listed[1].published_on, older_date);
}
