//! Contact-form enquiry models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{
    require_non_empty, require_short_text, validate_email, validate_max_len, validate_phone,
    MAX_LONG_TEXT_LEN,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `enquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl CreateEnquiry {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("name", &self.name)?;
        validate_email("email", &self.email)?;
        validate_phone("phone", self.phone.as_deref())?;
        require_short_text("subject", &self.subject)?;
        require_non_empty("message", &self.message)?;
        validate_max_len("message", &self.message, MAX_LONG_TEXT_LEN)
    }
}

/// Request body for `PUT /enquiries/{id}/resolve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveEnquiry {
    pub is_resolved: bool,
}

/// Query parameters for `GET /enquiries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnquiryListParams {
    pub is_resolved: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
