use axum::routing::{get, put};
use axum::Router;

use crate::handlers::galleries;
use crate::state::AppState;

/// Gallery routes mounted at `/galleries`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id (with images)
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/images               -> list_images
/// POST   /{id}/images               -> add_image
/// PUT    /{id}/images/{image_id}    -> update_image
/// DELETE /{id}/images/{image_id}    -> delete_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(galleries::list).post(galleries::create))
        .route(
            "/{id}",
            get(galleries::get_by_id)
                .put(galleries::update)
                .delete(galleries::delete),
        )
        .route(
            "/{id}/images",
            get(galleries::list_images).post(galleries::add_image),
        )
        .route(
            "/{id}/images/{image_id}",
            put(galleries::update_image).delete(galleries::delete_image),
        )
}
