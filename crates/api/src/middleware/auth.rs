//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use ngocms_core::error::CoreError;
use ngocms_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::auth::session_cookie::read_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user, as resolved by the session gate.
///
/// The gate stores the user in the request extensions after checking the
/// token and the account; without it the request is treated as anonymous.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<StatusCode> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (`"admin"` or `"editor"`).
    pub role: String,
}

/// Validate the credentials carried by `headers`.
///
/// An `Authorization: Bearer` header takes precedence over the cookie.
pub fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, AppError> {
    let bearer = match headers.get(AUTHORIZATION) {
        Some(value) => {
            let value = value.to_str().unwrap_or_default();
            let token = value.strip_prefix("Bearer ").ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;
            Some(token.trim().to_string())
        }
        None => None,
    };

    let token = bearer
        .or_else(|| read_session_token(headers, &state.config.cookie.name))
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Login required".into())))?;

    let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
    })?;

    Ok(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Login required".into())))
    }
}

/// The signed-in user if there is one. Never rejects.
///
/// Public endpoints use this to widen what they return to editors, such as
/// draft posts or closed job openings.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}
