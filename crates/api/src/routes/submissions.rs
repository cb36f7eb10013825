//! Route definitions for public form submissions.
//!
//! `POST /` is open to visitors; the rest needs a session.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{enquiries, join_applications};
use crate::state::AppState;

/// ```text
/// POST   /               -> submit
/// GET    /               -> list
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete
/// PUT    /{id}/resolve   -> resolve
/// ```
pub fn enquiries_router() -> Router<AppState> {
    Router::new()
        .route("/", get(enquiries::list).post(enquiries::submit))
        .route(
            "/{id}",
            get(enquiries::get_by_id).delete(enquiries::delete),
        )
        .route("/{id}/resolve", put(enquiries::resolve))
}

/// ```text
/// POST   /               -> submit
/// GET    /               -> list
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete
/// PUT    /{id}/status    -> update_status
/// ```
pub fn join_applications_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(join_applications::list).post(join_applications::submit),
        )
        .route(
            "/{id}",
            get(join_applications::get_by_id).delete(join_applications::delete),
        )
        .route("/{id}/status", put(join_applications::update_status))
}
