//! Handlers for the `/auth` resource (login, logout, current user).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use ngocms_core::error::CoreError;
use ngocms_db::models::user::UserResponse;
use ngocms_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::auth::session_cookie::{removal_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::data;
use crate::state::AppState;

/// Wrong passwords in a row that lock the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

const LOCK_DURATION_MINS: i64 = 15;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// Authenticate with username + password. Sets the session cookie and
/// returns the user.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let user = UserRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Too many failed logins; try again in a few minutes".into(),
            )));
        }
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failed = UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if failed >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
            tracing::warn!(user_id = user.id, failed, "Account locked after failed logins");
        }
        return Err(invalid());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = session_cookie(&token, &state.config.cookie, state.config.jwt.expiry_mins);

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok((
        [(SET_COOKIE, cookie.to_string())],
        data(UserResponse::from(user)),
    ))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. The token itself stays valid until it
/// expires, so API clients holding it should discard it too.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, removal_cookie(&state.config.cookie).to_string())],
    )
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account no longer active".into()))
        })?;
    Ok(data(UserResponse::from(user)))
}
