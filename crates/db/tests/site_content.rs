//! Integration tests for the simple site-content repositories.

use ngocms_db::models::banner::BannerInput;
use ngocms_db::models::career::CareerInput;
use ngocms_db::models::gallery::{GalleryImageInput, GalleryInput};
use ngocms_db::models::news::NewsArticleInput;
use ngocms_db::models::success_story::SuccessStoryInput;
use ngocms_db::repositories::{
    BannerRepo, CareerRepo, GalleryRepo, NewsRepo, SuccessStoryRepo,
};
use sqlx::PgPool;

fn banner(title: &str, is_active: bool) -> BannerInput {
    BannerInput {
        title: title.to_string(),
        title_hi: None,
        subtitle: None,
        subtitle_hi: None,
        image_url: "/media/banners/a.png".to_string(),
        link_url: None,
        is_active,
        sort_order: 0,
    }
}

fn career(title: &str, is_open: bool) -> CareerInput {
    CareerInput {
        title: title.to_string(),
        title_hi: None,
        department: None,
        location: "Delhi".to_string(),
        employment_type: "full-time".to_string(),
        description: "Role description".to_string(),
        description_hi: None,
        apply_by: None,
        is_open,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_banner_crud(pool: PgPool) {
    let created = BannerRepo::create(&pool, &banner("Welcome", true)).await.unwrap();
    assert!(created.is_active);

    let mut replacement = banner("Welcome back", false);
    replacement.sort_order = 4;
    let updated = BannerRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Welcome back");
    assert_eq!(updated.sort_order, 4);
    assert!(updated.updated_at >= created.updated_at);

    assert!(BannerRepo::list(&pool, false).await.unwrap().is_empty());
    assert_eq!(BannerRepo::list(&pool, true).await.unwrap().len(), 1);

    assert!(BannerRepo::delete(&pool, created.id).await.unwrap());
    assert!(!BannerRepo::delete(&pool, created.id).await.unwrap());
    assert!(BannerRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = BannerRepo::update(&pool, 424_242, &banner("Nope", true)).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_news_defaults_published_on_to_today(pool: PgPool) {
    let input = NewsArticleInput {
        title: "Press mention".to_string(),
        title_hi: None,
        summary: None,
        summary_hi: None,
        source: Some("Daily Times".to_string()),
        url: None,
        image_url: None,
        published_on: None,
    };
    let article = NewsRepo::create(&pool, &input).await.unwrap();
    let today: chrono::NaiveDate = sqlx::query_scalar("SELECT CURRENT_DATE")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(article.published_on, today);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_closed_careers_hidden_by_default(pool: PgPool) {
    CareerRepo::create(&pool, &career("Field officer", true)).await.unwrap();
    CareerRepo::create(&pool, &career("Old role", false)).await.unwrap();

    assert_eq!(CareerRepo::list(&pool, false).await.unwrap().len(), 1);
    assert_eq!(CareerRepo::list(&pool, true).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_success_story_slug_conflict(pool: PgPool) {
    let input = SuccessStoryInput {
        slug: None,
        title: "From village to varsity".to_string(),
        title_hi: None,
        person_name: Some("Meena".to_string()),
        content: "Story".to_string(),
        content_hi: None,
        image_url: None,
        sort_order: 0,
    };
    SuccessStoryRepo::create(&pool, "village-to-varsity", &input).await.unwrap();
    let err = SuccessStoryRepo::create(&pool, "village-to-varsity", &input)
        .await
        .expect_err("Duplicate slug should fail");
    assert_eq!(
        err.as_database_error().unwrap().constraint(),
        Some("uq_success_stories_slug")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_gallery_images_scoped_and_cascaded(pool: PgPool) {
    let gallery_input = GalleryInput {
        title: "Annual day".to_string(),
        title_hi: None,
        cover_image_url: None,
        sort_order: 0,
    };
    let gallery = GalleryRepo::create(&pool, &gallery_input).await.unwrap();
    let other = GalleryRepo::create(&pool, &gallery_input).await.unwrap();

    let image_input = GalleryImageInput {
        image_url: "/media/gallery/1.jpg".to_string(),
        caption: Some("Stage".to_string()),
        caption_hi: None,
        sort_order: 0,
    };
    let image = GalleryRepo::add_image(&pool, gallery.id, &image_input).await.unwrap();

    let wrong_gallery = GalleryRepo::update_image(&pool, other.id, image.id, &image_input)
        .await
        .unwrap();
    assert!(wrong_gallery.is_none());

    let detail = GalleryRepo::find_detail(&pool, gallery.id).await.unwrap().unwrap();
    assert_eq!(detail.images.len(), 1);

    assert!(GalleryRepo::delete(&pool, gallery.id).await.unwrap());
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gallery_images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
