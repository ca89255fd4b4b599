//! JSON body extractor that rejects with the API error envelope.

use axum::extract::FromRequest;

use crate::http::error::AppError;

/// `axum::Json` whose rejection is an [`AppError::Validation`] instead of
/// axum's plain-text response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
