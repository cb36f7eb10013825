//! Handlers for the `/users` resource (account management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ngocms_core::error::CoreError;
use ngocms_core::roles::{validate_role, ROLE_EDITOR};
use ngocms_core::types::DbId;
use ngocms_core::validation::{require_short_text, validate_email};
use ngocms_db::models::user::{CreateUser, UpdateUser, UserResponse};
use ngocms_db::repositories::UserRepo;
use serde::Deserialize;

use super::{deleted, not_found};
use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::data;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    ROLE_EDITOR.to_string()
}

/// Request body for `POST /users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

fn validate_update(input: &UpdateUser) -> Result<(), CoreError> {
    if let Some(username) = &input.username {
        require_short_text("username", username)?;
    }
    if let Some(email) = &input.email {
        validate_email("email", email)?;
    }
    if let Some(role) = &input.role {
        validate_role(role)?;
    }
    Ok(())
}

fn hash(password: &str) -> AppResult<String> {
    validate_password_strength(password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    require_short_text("username", &input.username)?;
    validate_email("email", &input.email)?;
    validate_role(&input.role)?;
    let password_hash = hash(&input.password)?;

    let dto = CreateUser {
        username: input.username.trim().to_string(),
        email: input.email.trim().to_string(),
        password_hash,
        role: input.role,
    };
    let user = UserRepo::create(&state.pool, &dto).await?;

    tracing::info!(user_id = user.id, admin_id = admin.user_id, role = %user.role, "User created");
    Ok((StatusCode::CREATED, data(UserResponse::from(user))))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<impl IntoResponse> {
    let users: Vec<UserResponse> = UserRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(data(users))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("User", id))?;
    Ok(data(UserResponse::from(user)))
}

/// PUT /api/users/{id}
///
/// Update profile fields; omitted fields keep their value.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateUser {
        username: input.username.map(|v| v.trim().to_string()),
        email: input.email.map(|v| v.trim().to_string()),
        ..input
    };
    validate_update(&input)?;

    let changes_own_role = input.role.as_deref().is_some_and(|role| role != admin.role);
    if id == admin.user_id && (input.is_active == Some(false) || changes_own_role) {
        return Err(AppError::BadRequest(
            "Admins cannot deactivate or change the role of their own account".into(),
        ));
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("User", id))?;

    tracing::info!(user_id = id, admin_id = admin.user_id, "User updated");
    Ok(data(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
///
/// Deactivates the account; the row is kept.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == admin.user_id {
        return Err(AppError::BadRequest(
            "Admins cannot deactivate their own account".into(),
        ));
    }
    let removed = UserRepo::deactivate(&state.pool, id).await?;
    if removed {
        tracing::info!(user_id = id, admin_id = admin.user_id, "User deactivated");
    }
    deleted(removed, "User", id)
}

/// POST /api/users/{id}/reset-password
///
/// Also clears any login lockout.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    let password_hash = hash(&input.new_password)?;
    let updated = UserRepo::update_password(&state.pool, id, &password_hash).await?;
    if updated {
        tracing::info!(user_id = id, admin_id = admin.user_id, "Password reset");
    }
    deleted(updated, "User", id)
}
