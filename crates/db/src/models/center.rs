//! Field center (office / branch location) models and DTOs.

use ngocms_core::error::CoreError;
use ngocms_core::locale::{pick, Locale, Localize};
use ngocms_core::types::{DbId, Timestamp};
use ngocms_core::validation::{
    require_non_empty, require_short_text, validate_coordinates, validate_email, validate_phone,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `centers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Center {
    pub id: DbId,
    pub name: String,
    pub name_hi: Option<String>,
    pub address: String,
    pub address_hi: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a center.
#[derive(Debug, Clone, Deserialize)]
pub struct CenterInput {
    pub name: String,
    pub name_hi: Option<String>,
    pub address: String,
    pub address_hi: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub sort_order: i32,
}

impl CenterInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_short_text("name", &self.name)?;
        require_non_empty("address", &self.address)?;
        require_short_text("city", &self.city)?;
        require_short_text("state", &self.state)?;
        validate_phone("phone", self.phone.as_deref())?;
        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            validate_email("email", email)?;
        }
        validate_coordinates(self.latitude, self.longitude)
    }
}

impl Localize for Center {
    fn localize(mut self, locale: Locale) -> Self {
        self.name = pick(locale, self.name, &self.name_hi);
        self.address = pick(locale, self.address, &self.address_hi);
        self
    }
}
