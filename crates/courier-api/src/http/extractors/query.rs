//! Query parameter extractors for list endpoints.
//!
//! Fields are optional so that missing parameters are reported by the
//! handler through the error envelope.

use axum::extract::FromRequestParts;
use serde::Deserialize;

use crate::http::error::AppError;

/// `axum::extract::Query` whose rejection is an [`AppError::Validation`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Query parameters for `GET /api/messages`.
#[derive(Debug, Deserialize, Default)]
pub struct PairQuery {
    #[serde(alias = "from_name")]
    pub from: Option<String>,
    #[serde(alias = "to_name")]
    pub to: Option<String>,
}

/// Query parameters for `GET /api/conversations`.
#[derive(Debug, Deserialize, Default)]
pub struct ConversationListQuery {
    /// Participant whose conversations to list.
    pub name: Option<String>,
}

/// Take a non-blank query parameter or fail with a validation error.
pub fn required(value: Option<String>, param: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("query parameter '{param}' is required")))
}
