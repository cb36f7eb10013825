//! Extractors whose rejections render through [`AppError`].
//!
//! Axum's own `Json` and `Query` reject with plain-text bodies (and `Json`
//! with 422 for a missing field). These wrappers keep the `{error, code}`
//! body and return 400 instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json<T>` with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query<T>` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
