//! Integration tests for public submissions, page views, and users.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use ngocms_db::models::enquiry::CreateEnquiry;
use ngocms_db::models::join_application::CreateJoinApplication;
use ngocms_db::models::page_view::RecordPageView;
use ngocms_db::models::user::{CreateUser, UpdateUser};
use ngocms_db::repositories::{EnquiryRepo, JoinApplicationRepo, PageViewRepo, UserRepo};
use sqlx::PgPool;
use uuid::Uuid;

fn enquiry(subject: &str) -> CreateEnquiry {
    CreateEnquiry {
        name: " Ravi ".to_string(),
        email: "ravi@example.org".to_string(),
        phone: None,
        subject: subject.to_string(),
        message: "Hello".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_enquiry_resolve_and_filter(pool: PgPool) {
    let first = EnquiryRepo::create(&pool, &enquiry("Donation")).await.unwrap();
    EnquiryRepo::create(&pool, &enquiry("Volunteering")).await.unwrap();
    assert_eq!(first.name, "Ravi");
    assert!(!first.is_resolved);

    let resolved = EnquiryRepo::set_resolved(&pool, first.id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(resolved.is_resolved);

    assert_eq!(EnquiryRepo::list(&pool, Some(true), 20, 0).await.unwrap().len(), 1);
    assert_eq!(EnquiryRepo::list(&pool, Some(false), 20, 0).await.unwrap().len(), 1);
    assert_eq!(EnquiryRepo::list(&pool, None, 20, 0).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_join_application_status(pool: PgPool) {
    let input = CreateJoinApplication {
        name: "Priya".to_string(),
        email: "priya@example.org".to_string(),
        phone: Some("+91 98765 43210".to_string()),
        area_of_interest: "Teaching".to_string(),
        message: None,
        resume_url: None,
    };
    let app = JoinApplicationRepo::create(&pool, &input).await.unwrap();
    assert_eq!(app.status, "new");

    let reviewed = JoinApplicationRepo::update_status(&pool, app.id, "reviewed")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reviewed.status, "reviewed");

    let bad = JoinApplicationRepo::update_status(&pool, app.id, "archived").await;
    assert_matches!(
        bad,
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23514")
    );

    assert_eq!(
        JoinApplicationRepo::list(&pool, Some("new"), 20, 0).await.unwrap().len(),
        0
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_page_view_summary(pool: PgPool) {
    let visitor_a = Uuid::new_v4();
    let visitor_b = Uuid::new_v4();
    for (path, visitor) in [("/", visitor_a), ("/", visitor_b), ("/about", visitor_a)] {
        let view = RecordPageView {
            path: path.to_string(),
            visitor_id: visitor,
            referrer: None,
        };
        PageViewRepo::record(&pool, &view, Some("test-agent")).await.unwrap();
    }
    sqlx::query(
        "INSERT INTO page_views (path, visitor_id, viewed_at)
         VALUES ('/old', $1, NOW() - INTERVAL '40 days')",
    )
    .bind(visitor_b)
    .execute(&pool)
    .await
    .unwrap();

    let summary = PageViewRepo::summary(&pool, 30).await.unwrap();
    assert_eq!(summary.total_views, 3);
    assert_eq!(summary.unique_visitors, 2);
    assert_eq!(summary.top_pages[0].path, "/");
    assert_eq!(summary.top_pages[0].views, 2);
    assert!(summary.top_pages.iter().all(|p| p.path != "/old"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_lockout_bookkeeping(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "editor1".to_string(),
            email: "editor1@example.org".to_string(),
            password_hash: "hash".to_string(),
            role: "editor".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 1);
    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 2);
    UserRepo::lock_account(&pool, user.id, Utc::now() + Duration::minutes(15))
        .await
        .unwrap();

    let locked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_matches!(locked.locked_until, Some(_));

    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let cleared = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(cleared.failed_login_count, 0);
    assert!(cleared.locked_until.is_none());
    assert!(cleared.last_login_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_failure_after_expired_lock_restarts_count(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "slow-typist".to_string(),
            email: "slow-typist@example.org".to_string(),
            password_hash: "hash".to_string(),
            role: "editor".to_string(),
        },
    )
    .await
    .unwrap();

    for _ in 0..5 {
        UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
    }
    UserRepo::lock_account(&pool, user.id, Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 1);
    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_matches!(reloaded.locked_until, None);

    // A lock still in force keeps counting.
    UserRepo::lock_account(&pool, user.id, Utc::now() + Duration::minutes(15))
        .await
        .unwrap();
    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 2);
    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_matches!(reloaded.locked_until, Some(_));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_update_and_deactivate(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "admin1".to_string(),
            email: "admin1@example.org".to_string(),
            password_hash: "hash".to_string(),
            role: "admin".to_string(),
        },
    )
    .await
    .unwrap();

    let updated = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            username: None,
            email: Some("new@example.org".to_string()),
            role: Some("editor".to_string()),
            is_active: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.username, "admin1");
    assert_eq!(updated.email, "new@example.org");
    assert_eq!(updated.role, "editor");

    assert!(UserRepo::deactivate(&pool, user.id).await.unwrap());
    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(!reloaded.is_active);
}
