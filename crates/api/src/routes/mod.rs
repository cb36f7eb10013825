pub mod auth;
pub mod galleries;
pub mod health;
pub mod submissions;

use axum::routing::{get, post};
use axum::{Extension, Router};
use ngocms_db::repositories::Taxonomy;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                 login (public)
/// /auth/logout                                logout (public)
/// /auth/me                                    current user
///
/// /users                                      list, create (admin only)
/// /users/{id}                                 get, update, deactivate
/// /users/{id}/reset-password                  reset password
///
/// /blogs                                      list, create
/// /blogs/{id}                                 get, update, delete
/// /blogs/slug/{slug}                          get by slug
/// /blog-categories, /blog-tags, /authors      list, create
/// /blog-categories/{id}, /blog-tags/{id},
/// /authors/{id}                               get, update, delete
///
/// /banners, /carousels, /features,
/// /testimonials, /awards, /centers,
/// /careers, /site-statistics                  list, create
/// /{resource}/{id}                            get, update, delete
///
/// /initiatives, /electronic-media, /news      list, create
/// /{resource}/{id}                            get, update, delete
/// /{resource}/reorder                         swap two positions (POST)
///
/// /success-stories                            list, create
/// /success-stories/{id}                       get, update, delete
/// /success-stories/slug/{slug}                get by slug
///
/// /galleries                                  list, create
/// /galleries/{id}                             get (with images), update, delete
/// /galleries/{id}/images                      list, add
/// /galleries/{id}/images/{image_id}           update, delete
///
/// /enquiries                                  submit (public), list
/// /enquiries/{id}                             get, delete
/// /enquiries/{id}/resolve                     mark resolved (PUT)
/// /join-applications                          submit (public), list
/// /join-applications/{id}                     get, delete
/// /join-applications/{id}/status              set status (PUT)
///
/// /uploads                                    upload (POST), delete (?key=)
/// /search                                     unified search (public)
/// /analytics/page-views                       record a view (public POST)
/// /analytics/summary                          traffic summary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::auth_router())
        .nest("/users", auth::users_router())
        // --- Blog ---
        .nest("/blogs", blog_router())
        .nest(
            "/blog-categories",
            taxonomy_router().layer(Extension(Taxonomy::Category)),
        )
        .nest("/blog-tags", taxonomy_router().layer(Extension(Taxonomy::Tag)))
        .nest("/authors", authors_router())
        // --- Site content ---
        .nest("/banners", banners_router())
        .nest("/carousels", carousels_router())
        .nest("/features", features_router())
        .nest("/testimonials", testimonials_router())
        .nest("/awards", awards_router())
        .nest("/centers", centers_router())
        .nest("/careers", careers_router())
        .nest("/site-statistics", site_statistics_router())
        .nest("/initiatives", initiatives_router())
        .nest("/electronic-media", electronic_media_router())
        .nest("/news", news_router())
        .nest("/success-stories", success_stories_router())
        .nest("/galleries", galleries::router())
        // --- Visitor submissions ---
        .nest("/enquiries", submissions::enquiries_router())
        .nest("/join-applications", submissions::join_applications_router())
        // --- Media, search, analytics ---
        .route(
            "/uploads",
            post(handlers::uploads::upload).delete(handlers::uploads::delete),
        )
        .route("/search", get(handlers::search::search))
        .route(
            "/analytics/page-views",
            post(handlers::analytics::record_page_view),
        )
        .route("/analytics/summary", get(handlers::analytics::summary))
}

fn blog_router() -> Router<AppState> {
    use handlers::blogs;
    Router::new()
        .route("/", get(blogs::list).post(blogs::create))
        .route(
            "/{id}",
            get(blogs::get_by_id).put(blogs::update).delete(blogs::delete),
        )
        .route("/slug/{slug}", get(blogs::get_by_slug))
}

/// Shared by `/blog-categories` and `/blog-tags`; the caller layers the [`Taxonomy`].
fn taxonomy_router() -> Router<AppState> {
    use handlers::taxonomy;
    Router::new()
        .route("/", get(taxonomy::list).post(taxonomy::create))
        .route(
            "/{id}",
            get(taxonomy::get_by_id)
                .put(taxonomy::update)
                .delete(taxonomy::delete),
        )
}

fn authors_router() -> Router<AppState> {
    use handlers::authors;
    Router::new()
        .route("/", get(authors::list).post(authors::create))
        .route(
            "/{id}",
            get(authors::get_by_id)
                .put(authors::update)
                .delete(authors::delete),
        )
}

fn banners_router() -> Router<AppState> {
    use handlers::banners;
    Router::new()
        .route("/", get(banners::list).post(banners::create))
        .route(
            "/{id}",
            get(banners::get_by_id)
                .put(banners::update)
                .delete(banners::delete),
        )
}

fn carousels_router() -> Router<AppState> {
    use handlers::carousels;
    Router::new()
        .route("/", get(carousels::list).post(carousels::create))
        .route(
            "/{id}",
            get(carousels::get_by_id)
                .put(carousels::update)
                .delete(carousels::delete),
        )
}

fn features_router() -> Router<AppState> {
    use handlers::features;
    Router::new()
        .route("/", get(features::list).post(features::create))
        .route(
            "/{id}",
            get(features::get_by_id)
                .put(features::update)
                .delete(features::delete),
        )
}

fn testimonials_router() -> Router<AppState> {
    use handlers::testimonials;
    Router::new()
        .route("/", get(testimonials::list).post(testimonials::create))
        .route(
            "/{id}",
            get(testimonials::get_by_id)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
}

fn awards_router() -> Router<AppState> {
    use handlers::awards;
    Router::new()
        .route("/", get(awards::list).post(awards::create))
        .route(
            "/{id}",
            get(awards::get_by_id)
                .put(awards::update)
                .delete(awards::delete),
        )
}

fn centers_router() -> Router<AppState> {
    use handlers::centers;
    Router::new()
        .route("/", get(centers::list).post(centers::create))
        .route(
            "/{id}",
            get(centers::get_by_id)
                .put(centers::update)
                .delete(centers::delete),
        )
}

fn careers_router() -> Router<AppState> {
    use handlers::careers;
    Router::new()
        .route("/", get(careers::list).post(careers::create))
        .route(
            "/{id}",
            get(careers::get_by_id)
                .put(careers::update)
                .delete(careers::delete),
        )
}

fn site_statistics_router() -> Router<AppState> {
    use handlers::site_statistics;
    Router::new()
        .route(
            "/",
            get(site_statistics::list).post(site_statistics::create),
        )
        .route(
            "/{id}",
            get(site_statistics::get_by_id)
                .put(site_statistics::update)
                .delete(site_statistics::delete),
        )
}

fn initiatives_router() -> Router<AppState> {
    use handlers::initiatives;
    Router::new()
        .route("/", get(initiatives::list).post(initiatives::create))
        .route("/reorder", post(initiatives::reorder))
        .route(
            "/{id}",
            get(initiatives::get_by_id)
                .put(initiatives::update)
                .delete(initiatives::delete),
        )
}

fn electronic_media_router() -> Router<AppState> {
    use handlers::electronic_media;
    Router::new()
        .route(
            "/",
            get(electronic_media::list).post(electronic_media::create),
        )
        .route("/reorder", post(electronic_media::reorder))
        .route(
            "/{id}",
            get(electronic_media::get_by_id)
                .put(electronic_media::update)
                .delete(electronic_media::delete),
        )
}

fn news_router() -> Router<AppState> {
    use handlers::news;
    Router::new()
        .route("/", get(news::list).post(news::create))
        .route("/reorder", post(news::reorder))
        .route(
            "/{id}",
            get(news::get_by_id).put(news::update).delete(news::delete),
        )
}

fn success_stories_router() -> Router<AppState> {
    use handlers::success_stories;
    Router::new()
        .route(
            "/",
            get(success_stories::list).post(success_stories::create),
        )
        .route(
            "/{id}",
            get(success_stories::get_by_id)
                .put(success_stories::update)
                .delete(success_stories::delete),
        )
        .route("/slug/{slug}", get(success_stories::get_by_slug))
}
