//! Shared query parameter types for API handlers.

use ngocms_core::locale::Locale;
use serde::Deserialize;

/// `?locale=en|hi` on public reads. Omitted by admin screens, which then
/// receive both halves of every locale field pair.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<Locale>,
}

/// Generic pagination parameters (`?limit=&offset=`), clamped in handlers
/// via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub locale: Option<Locale>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Lists with an `include_inactive` flag. The flag is honoured only for
/// signed-in users; the public site always sees active rows.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeInactiveParams {
    pub locale: Option<Locale>,
    #[serde(default)]
    pub include_inactive: bool,
}
