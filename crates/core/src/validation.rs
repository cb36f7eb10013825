//! Field-level validation helpers used by handlers before touching the
//! database.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length of short text fields (titles, names, subjects).
pub const MAX_SHORT_TEXT_LEN: usize = 255;

/// Maximum length of long text fields (messages, descriptions).
pub const MAX_LONG_TEXT_LEN: usize = 20_000;

/// Reject an empty or whitespace-only required string.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject a string longer than `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// [`require_non_empty`] plus the short-text length bound.
pub fn require_short_text(field: &str, value: &str) -> Result<(), CoreError> {
    require_non_empty(field, value)?;
    validate_max_len(field, value, MAX_SHORT_TEXT_LEN)
}

/// Validate an email address.
pub fn validate_email(field: &str, value: &str) -> Result<(), CoreError> {
    let candidate = value.trim().to_string();
    if !candidate.validate_email() {
        return Err(CoreError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

/// Validate an optional phone number: digits plus `+ - ( )` and spaces, 7-20 chars.
pub fn validate_phone(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !allowed || !(7..=20).contains(&value.len()) || digits < 7 {
        return Err(CoreError::Validation(format!(
            "{field} must be a valid phone number"
        )));
    }
    Ok(())
}

/// Validate a latitude/longitude pair when either half is present.
pub fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(), CoreError> {
    match (latitude, longitude) {
        (None, None) => Ok(()),
        (Some(lat), Some(lng)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                return Err(CoreError::Validation(
                    "Coordinates out of range".into(),
                ));
            }
            Ok(())
        }
        _ => Err(CoreError::Validation(
            "latitude and longitude must be provided together".into(),
        )),
    }
}
