//! HTTP-level integration tests for the site content resources: the CRUD
//! contract, the session gate, locale fallback, reordering, and blog
//! visibility.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete, delete_auth, get, get_auth, post_json, post_json_auth, put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn banner(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "title_hi": format!("{title} (hi)"),
        "image_url": "http://media.test/banners/a.png",
    })
}

fn initiative(title: &str) -> serde_json::Value {
    json!({ "title": title, "description": format!("About {title}") })
}

async fn create(
    app: &axum::Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> serde_json::Value {
    let response = post_json_auth(app.clone(), uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await["data"].clone()
}

async fn create_author(app: &axum::Router, token: &str) -> i64 {
    let author = create(app, "/api/authors", json!({ "name": "Field Team" }), token).await;
    author["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// CRUD contract
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn banner_crud_round_trip(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let created = create(&app, "/api/banners", banner("Monsoon Relief"), &token).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["title"], "Monsoon Relief");
    assert_eq!(created["is_active"], true);

    let response = get(app.clone(), &format!("/api/banners/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/banners/{id}"),
        banner("Winter Drive"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["title"], "Winter Drive");

    let response = delete_auth(app.clone(), &format!("/api/banners/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/banners/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = delete_auth(app, &format!("/api/banners/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_is_a_full_replace(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let created = create(&app, "/api/banners", banner("Clinic"), &token).await;
    let id = created["id"].as_i64().unwrap();

    // `image_url` is required on every write.
    let response = put_json_auth(
        app,
        &format!("/api/banners/{id}"),
        json!({ "title": "Clinic" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_JSON");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_required_field_is_a_validation_error(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(app, "/api/banners", banner("   "), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Session gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn writes_require_a_session(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app.clone(), "/api/banners", banner("Sneaky")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete(app.clone(), "/api/banners/1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/initiatives/reorder",
        json!({ "first_id": 1, "second_id": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reads_are_public(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    for uri in [
        "/api/banners",
        "/api/carousels",
        "/api/features",
        "/api/testimonials",
        "/api/awards",
        "/api/centers",
        "/api/careers",
        "/api/site-statistics",
        "/api/initiatives",
        "/api/electronic-media",
        "/api/news",
        "/api/success-stories",
        "/api/galleries",
        "/api/blogs",
        "/api/blog-categories",
        "/api/blog-tags",
        "/api/authors",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert!(body_json(response).await["data"].is_array(), "GET {uri}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn inactive_banners_are_hidden_from_visitors(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let mut hidden = banner("Hidden");
    hidden["is_active"] = json!(false);
    create(&app, "/api/banners", hidden, &token).await;
    create(&app, "/api/banners", banner("Shown"), &token).await;

    let response = get(app.clone(), "/api/banners?include_inactive=true").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Shown");

    let response = get_auth(app, "/api/banners?include_inactive=true", &token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn hindi_locale_falls_back_to_english(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let created = create(
        &app,
        "/api/initiatives",
        json!({
            "title": "Clean Water",
            "title_hi": "स्वच्छ जल",
            "description": "Wells for villages",
        }),
        &token,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/initiatives/{id}?locale=hi")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "स्वच्छ जल");
    // No Hindi description was entered.
    assert_eq!(json["data"]["description"], "Wells for villages");

    let response = get(app.clone(), &format!("/api/initiatives/{id}?locale=HI")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "स्वच्छ जल");

    // Without a locale both halves are returned untouched.
    let response = get(app.clone(), &format!("/api/initiatives/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Clean Water");
    assert_eq!(json["data"]["title_hi"], "स्वच्छ जल");

    let response = get(app, &format!("/api/initiatives/{id}?locale=fr")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_swaps_positions(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let first = create(&app, "/api/initiatives", initiative("Education"), &token).await;
    let second = create(&app, "/api/initiatives", initiative("Health"), &token).await;
    let (first_id, second_id) = (first["id"].as_i64().unwrap(), second["id"].as_i64().unwrap());

    let response = post_json_auth(
        app.clone(),
        "/api/initiatives/reorder",
        json!({ "first_id": first_id, "second_id": second_id }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/initiatives").await;
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Health", "Education"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_with_missing_record_is_404(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let only = create(&app, "/api/initiatives", initiative("Livelihoods"), &token).await;
    let id = only["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/initiatives/reorder",
        json!({ "first_id": id, "second_id": id + 1000 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json_auth(
        app,
        "/api/initiatives/reorder",
        json!({ "first_id": id, "second_id": id }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Blogs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn blog_slug_is_unique_per_locale(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;
    let author_id = create_author(&app, &token).await;

    let post = |locale: &str| {
        json!({
            "locale": locale,
            "title": "Flood Update",
            "content": "Relief camps are open.",
            "author_id": author_id,
            "status": "published",
        })
    };

    let created = create(&app, "/api/blogs", post("en"), &token).await;
    assert_eq!(created["slug"], "flood-update");
    assert_eq!(created["author"]["name"], "Field Team");

    let response = post_json_auth(app.clone(), "/api/blogs", post("en"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The same slug in the other locale is a different post.
    create(&app, "/api/blogs", post("hi"), &token).await;

    let response = get(app, "/api/blogs/slug/flood-update?locale=hi").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["locale"], "hi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn drafts_are_hidden_from_visitors(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;
    let author_id = create_author(&app, &token).await;

    let draft = create(
        &app,
        "/api/blogs",
        json!({
            "title": "Work in progress",
            "content": "Not ready yet.",
            "author_id": author_id,
        }),
        &token,
    )
    .await;
    assert_eq!(draft["status"], "draft");
    let id = draft["id"].as_i64().unwrap();

    let response = get(app.clone(), "/api/blogs").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let response = get(app.clone(), &format!("/api/blogs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app.clone(), "/api/blogs/slug/work-in-progress").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, &format!("/api/blogs/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blog_with_unknown_author_is_rejected(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(
        app,
        "/api/blogs",
        json!({ "title": "Orphan", "content": "No author.", "author_id": 999 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn categories_and_tags_are_separate(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    create(&app, "/api/blog-categories", json!({ "name": "Field Notes" }), &token).await;

    let response = get(app.clone(), "/api/blog-categories").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/blog-tags").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Galleries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn gallery_images_are_scoped_to_their_gallery(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let gallery = create(&app, "/api/galleries", json!({ "title": "Camp 2025" }), &token).await;
    let other = create(&app, "/api/galleries", json!({ "title": "Camp 2024" }), &token).await;
    let (gid, other_id) = (gallery["id"].as_i64().unwrap(), other["id"].as_i64().unwrap());

    let image = create(
        &app,
        &format!("/api/galleries/{gid}/images"),
        json!({ "image_url": "http://media.test/galleries/1.jpg", "caption": "Day one" }),
        &token,
    )
    .await;
    let image_id = image["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/galleries/{gid}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Camp 2025");
    assert_eq!(json["data"]["images"][0]["caption"], "Day one");

    let response = delete_auth(
        app.clone(),
        &format!("/api/galleries/{other_id}/images/{image_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json_auth(
        app,
        "/api/galleries/99999/images",
        json!({ "image_url": "http://media.test/x.jpg" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
