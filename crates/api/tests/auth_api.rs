//! HTTP-level integration tests for login, the session cookie, and user
//! administration.

mod common;

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, delete_auth, get, get_auth, post_json, post_json_auth, put_json_auth, send,
};
use ngocms_api::auth::password::hash_password;
use ngocms_api::bootstrap::ensure_admin;
use ngocms_api::config::BootstrapAdmin;
use ngocms_api::error::AppError;
use ngocms_db::models::user::{CreateUser, User};
use ngocms_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PASSWORD: &str = "correct-horse-battery";

/// Create a user with a real password hash so it can log in.
async fn create_login_user(pool: &PgPool, username: &str, role: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.org"),
        password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

fn login_body(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

/// The `name=value` pair of the response's session cookie.
fn session_pair(response: &axum::http::Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set a cookie")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_sets_http_only_session_cookie(pool: PgPool) {
    let user = create_login_user(&pool, "asha", "editor").await;
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/api/auth/login", login_body("asha", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap().to_string();
    assert!(cookie.starts_with("ngocms_session="));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["username"], "asha");
    assert_eq!(json["data"]["role"], "editor");
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn session_cookie_authenticates_me(pool: PgPool) {
    create_login_user(&pool, "ravi", "admin").await;
    let app = common::build_test_app(pool).await;

    let response = post_json(app.clone(), "/api/auth/login", login_body("ravi", PASSWORD)).await;
    let cookie = session_pair(&response);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/me")
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "ravi");
    assert_eq!(json["data"]["role"], "admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_and_unknown_user_are_401(pool: PgPool) {
    create_login_user(&pool, "meera", "editor").await;
    let app = common::build_test_app(pool).await;

    let response = post_json(app.clone(), "/api/auth/login", login_body("meera", "nope")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(app, "/api/auth/login", login_body("ghost", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_account_cannot_log_in(pool: PgPool) {
    let user = create_login_user(&pool, "former", "editor").await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/api/auth/login", login_body("former", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeated_failures_lock_the_account(pool: PgPool) {
    create_login_user(&pool, "target", "editor").await;
    let app = common::build_test_app(pool).await;

    for _ in 0..5 {
        let response =
            post_json(app.clone(), "/api/auth/login", login_body("target", "guess")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is refused while locked.
    let response = post_json(app, "/api/auth/login", login_body("target", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn expired_lock_restarts_the_failure_count(pool: PgPool) {
    let user = create_login_user(&pool, "typo", "editor").await;
    let app = common::build_test_app(pool.clone()).await;

    for _ in 0..5 {
        let response =
            post_json(app.clone(), "/api/auth/login", login_body("typo", "guess")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    sqlx::query("UPDATE users SET locked_until = NOW() - INTERVAL '1 minute' WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    // One slip after the lock expires must not lock the account again.
    let response = post_json(app.clone(), "/api/auth/login", login_body("typo", "guess")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let account = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(account.failed_login_count, 1);
    assert_matches!(account.locked_until, None);

    let response = post_json(app, "/api/auth/login", login_body("typo", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_clears_the_cookie(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/api/auth/logout", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("ngocms_session=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_without_session_is_401(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_bearer_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/auth/me", "not.a.token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// User administration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn editors_cannot_manage_users(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let response = get_auth(app, "/api/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_creates_editor_who_can_log_in(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "username": "newbie",
        "email": "newbie@example.org",
        "password": "long-enough-password",
    });
    let response = post_json_auth(app.clone(), "/api/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "editor");

    let response = post_json(
        app,
        "/api/auth/login",
        login_body("newbie", "long-enough-password"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "username": "shorty",
        "email": "shorty@example.org",
        "password": "short",
    });
    let response = post_json_auth(app, "/api/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_is_409(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "username": "admin",
        "email": "other@example.org",
        "password": "long-enough-password",
    });
    let response = post_json_auth(app, "/api/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_cannot_deactivate_self(pool: PgPool) {
    let admin = common::create_user(&pool, "root", "admin").await;
    let token = common::token_for(&admin);
    let app = common::build_test_app(pool).await;

    let response = delete_auth(app.clone(), &format!("/api/users/{}", admin.id), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        &format!("/api/users/{}", admin.id),
        serde_json::json!({ "role": "editor" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_editor_token_cannot_write(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let editor = common::create_user(&pool, "leaving", "editor").await;
    let editor_token = common::token_for(&editor);
    let app = common::build_test_app(pool).await;

    let award = serde_json::json!({ "title": "Best rural programme" });
    let response = post_json_auth(app.clone(), "/api/awards", award.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let award_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/users/{}", editor.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json_auth(app.clone(), "/api/awards", award, &editor_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response =
        delete_auth(app.clone(), &format!("/api/awards/{award_id}"), &editor_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app.clone(), "/api/auth/me", &editor_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Public reads still work; the stale token is simply ignored.
    let response = get_auth(app, &format!("/api/awards/{award_id}"), &editor_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn demoted_admin_loses_user_management_immediately(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let other = common::create_user(&pool, "second-admin", "admin").await;
    let other_token = common::token_for(&other);
    let app = common::build_test_app(pool).await;

    let response = get_auth(app.clone(), "/api/users", &other_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/users/{}", other.id),
        serde_json::json!({ "role": "editor" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The old token still claims `admin`.
    let response = get_auth(app, "/api/users", &other_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reset_password_unlocks_the_account(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let user = create_login_user(&pool, "forgetful", "editor").await;
    let app = common::build_test_app(pool.clone()).await;

    for _ in 0..5 {
        post_json(app.clone(), "/api/auth/login", login_body("forgetful", "guess")).await;
    }
    let locked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_matches!(locked.locked_until, Some(_));

    let response = post_json_auth(
        app.clone(),
        &format!("/api/users/{}/reset-password", user.id),
        serde_json::json!({ "new_password": "brand-new-passphrase" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let account = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_ne!(account.password_hash, locked.password_hash);
    assert_eq!(account.failed_login_count, 0);
    assert_matches!(account.locked_until, None);

    let response =
        post_json(app.clone(), "/api/auth/login", login_body("forgetful", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/auth/login",
        login_body("forgetful", "brand-new-passphrase"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reset_password_for_unknown_user_is_404(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        app,
        "/api/users/9999/reset-password",
        serde_json::json!({ "new_password": "brand-new-passphrase" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_may_resubmit_own_role_and_trimmed_fields_are_stored(pool: PgPool) {
    let admin = common::create_user(&pool, "root", "admin").await;
    let token = common::token_for(&admin);
    let app = common::build_test_app(pool).await;

    let response = put_json_auth(
        app,
        &format!("/api/users/{}", admin.id),
        serde_json::json!({ "role": "admin", "email": "  root@ngo.example.org  " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "root@ngo.example.org");
}

// ---------------------------------------------------------------------------
// Bootstrap admin
// ---------------------------------------------------------------------------

fn bootstrap_admin(username: &str, password: &str) -> BootstrapAdmin {
    BootstrapAdmin {
        username: username.to_string(),
        email: format!("{username}@example.org"),
        password: password.to_string(),
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bootstrap_creates_an_admin_only_on_an_empty_table(pool: PgPool) {
    let created = ensure_admin(&pool, &bootstrap_admin("founder", PASSWORD)).await;
    assert_matches!(created, Ok(true));

    let founder = UserRepo::find_by_username(&pool, "founder")
        .await
        .unwrap()
        .expect("bootstrap admin should exist");
    assert_eq!(founder.role, "admin");
    assert!(founder.is_active);

    let again = ensure_admin(&pool, &bootstrap_admin("second", PASSWORD)).await;
    assert_matches!(again, Ok(false));
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);

    let app = common::build_test_app(pool).await;
    let response = post_json(app, "/api/auth/login", login_body("founder", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bootstrap_rejects_a_weak_password(pool: PgPool) {
    let result = ensure_admin(&pool, &bootstrap_admin("founder", "short")).await;
    assert_matches!(result, Err(AppError::BadRequest(_)));
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
}
