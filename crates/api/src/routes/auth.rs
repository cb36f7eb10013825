//! Route definitions for sessions and user administration.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, users};
use crate::state::AppState;

/// Session routes mounted at `/auth`.
///
/// ```text
/// POST   /login     -> login
/// POST   /logout    -> logout
/// GET    /me        -> me
/// ```
pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// User administration mounted at `/users` (admin only).
///
/// ```text
/// GET    /                       -> list_users
/// POST   /                       -> create_user
/// GET    /{id}                   -> get_user
/// PUT    /{id}                   -> update_user
/// DELETE /{id}                   -> deactivate_user
/// POST   /{id}/reset-password    -> reset_password
/// ```
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::deactivate_user),
        )
        .route("/{id}/reset-password", post(users::reset_password))
}
