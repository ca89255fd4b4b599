//! Application error type mapping to HTTP status codes and envelope format.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use courier_types::error::{MessagingError, UserError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Errors from the messaging service.
    Messaging(MessagingError),
    /// Errors from the user directory.
    User(UserError),
    /// Malformed request rejected before reaching a service.
    Validation(String),
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        AppError::User(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MessagingError> for AppError {
    fn from(e: MessagingError) -> Self {
        AppError::Messaging(e)
    }
}

impl AppError {
    /// Status code, machine-readable code and message for this error.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Messaging(MessagingError::Validation(msg))
            | AppError::User(UserError::Validation(msg))
            | AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Messaging(MessagingError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone())
            }
            AppError::Messaging(e @ MessagingError::Decode { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORE_CORRUPT", e.to_string())
            }
            AppError::Messaging(e @ MessagingError::Io(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORE_UNAVAILABLE", e.to_string())
            }
            AppError::User(e @ UserError::Conflict(_)) => {
                (StatusCode::CONFLICT, "USER_EXISTS", e.to_string())
            }
            AppError::User(e @ UserError::Io(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "USER_DIRECTORY_UNAVAILABLE", e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        }

        let body = json!({
            "data": null,
            "meta": {
                "request_id": uuid::Uuid::now_v7().to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
