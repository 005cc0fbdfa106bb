//! Request extractors whose rejections render as `AppError`.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with malformed bodies reported as 400 validation errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
