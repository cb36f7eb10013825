//! The session gate.
//!
//! Every request under `/api` needs a valid session unless [`is_public`]
//! says otherwise: public site reads and the handful of forms visitors
//! submit. Paths outside `/api` (`/health`, `/media`) are never gated.

use axum::body::Body;
use axum::extract::{OriginalUri, Request, State};
use axum::http::{HeaderMap, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use ngocms_core::error::CoreError;
use ngocms_db::repositories::UserRepo;

use super::auth::{authenticate, AuthUser};
use crate::error::AppError;
use crate::state::AppState;

/// Reads under these prefixes are admin-only.
const PROTECTED_READ_PREFIXES: &[&str] = &[
    "/api/enquiries",
    "/api/join-applications",
    "/api/analytics/summary",
    "/api/auth/me",
    "/api/users",
    "/api/uploads",
];

/// Writes visitors may make without signing in (exact paths, `POST` only).
const PUBLIC_WRITES: &[&str] = &[
    "/api/auth/login",
    "/api/auth/logout",
    "/api/enquiries",
    "/api/join-applications",
    "/api/analytics/page-views",
];

/// Whether `method path` may proceed without a session.
pub fn is_public(method: &Method, path: &str) -> bool {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if !under(path, "/api") {
        return true;
    }
    if method == Method::OPTIONS {
        return true;
    }
    if method == Method::GET || method == Method::HEAD {
        return !PROTECTED_READ_PREFIXES
            .iter()
            .any(|prefix| under(path, prefix));
    }
    method == Method::POST && PUBLIC_WRITES.contains(&path)
}

/// `path` equals `prefix` or continues it with a new segment.
fn under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Middleware for `axum::middleware::from_fn_with_state`.
///
/// A valid session is stored in the request extensions even on public
/// paths, so public handlers can tell editors from visitors. The account
/// behind the token is loaded on every request: a deactivated user is
/// refused with 403 on protected paths and treated as a visitor on public
/// ones, and the stored [`AuthUser`] carries the current role rather than
/// the one in the token.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| req.uri().path().to_string(), |uri| uri.path().to_string());
    let public = is_public(req.method(), &path);

    match current_user(req.headers(), &state).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
        }
        Err(err) if !public => {
            tracing::debug!(
                method = %req.method(),
                path = %path,
                "Rejected request without a valid session"
            );
            return err.into_response();
        }
        Err(_) => {}
    }

    next.run(req).await
}

/// Validate the token, then check the account it names is still active.
async fn current_user(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, AppError> {
    let claimed = authenticate(headers, state)?;
    let account = UserRepo::find_by_id(&state.pool, claimed.user_id)
        .await?
        .filter(|account| account.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Forbidden("Account is deactivated".into())))?;

    Ok(AuthUser {
        user_id: account.id,
        role: account.role,
    })
}
