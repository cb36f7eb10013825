//! HTTP handlers, one module per resource.
//!
//! Content handlers follow one shape: public `list` / `get_by_id` honour
//! `?locale=`, while `create` / `update` / `delete` require a session and
//! log the acting user.

pub mod analytics;
pub mod auth;
pub mod authors;
pub mod awards;
pub mod banners;
pub mod blogs;
pub mod careers;
pub mod carousels;
pub mod centers;
pub mod electronic_media;
pub mod enquiries;
pub mod features;
pub mod galleries;
pub mod initiatives;
pub mod join_applications;
pub mod news;
pub mod search;
pub mod site_statistics;
pub mod success_stories;
pub mod taxonomy;
pub mod testimonials;
pub mod uploads;
pub mod users;

use axum::http::StatusCode;
use ngocms_core::error::CoreError;
use ngocms_core::types::DbId;

use crate::error::{AppError, AppResult};

/// 404 for a row looked up by id.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::not_found(entity, id))
}

/// 204 when a delete removed a row, 404 otherwise.
pub(crate) fn deleted(removed: bool, entity: &'static str, id: DbId) -> AppResult<StatusCode> {
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(entity, id))
    }
}
