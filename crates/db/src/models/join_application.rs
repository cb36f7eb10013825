//! "Join us" (volunteer / membership) application models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{
    require_short_text, validate_email, validate_max_len, validate_phone, MAX_LONG_TEXT_LEN,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Newly submitted, not yet looked at.
pub const APPLICATION_STATUS_NEW: &str = "new";

/// Accepted `join_applications.status` values.
pub const APPLICATION_STATUSES: &[&str] = &[
    APPLICATION_STATUS_NEW,
    "reviewed",
    "accepted",
    "rejected",
];

/// A row from the `join_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JoinApplication {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub area_of_interest: String,
    pub message: Option<String>,
    pub resume_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public application form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJoinApplication {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub area_of_interest: String,
    pub message: Option<String>,
    pub resume_url: Option<String>,
}

impl CreateJoinApplication {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("name", &self.name)?;
        validate_email("email", &self.email)?;
        validate_phone("phone", self.phone.as_deref())?;
        require_short_text("area_of_interest", &self.area_of_interest)?;
        if let Some(message) = &self.message {
            validate_max_len("message", message, MAX_LONG_TEXT_LEN)?;
        }
        Ok(())
    }
}

/// Request body for `PUT /join-applications/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApplicationStatus {
    pub status: String,
}

impl UpdateApplicationStatus {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !APPLICATION_STATUSES.contains(&self.status.as_str()) {
            return Err(CoreError::Validation(format!(
                "Invalid status '{}'. Must be one of: {}",
                self.status,
                APPLICATION_STATUSES.join(", ")
            )));
        }
        Ok(())
    }
}

/// Query parameters for `GET /join-applications`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinApplicationListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
