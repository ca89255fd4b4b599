//! User handlers.
//!
//! Login and user details echo the name back; there is no authentication.
//! The user directory (`/api/users`) is a separate registry and is never
//! consulted when messages are created.

use std::time::Instant;

use axum::extract::{Path, State};

use courier_types::user::{CreateUserRequest, User};

use crate::http::error::AppError;
use crate::http::extractors::json::AppJson;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/login - Echo the user back; no credentials are checked.
pub async fn login(AppJson(user): AppJson<User>) -> Result<ApiResponse<User>, AppError> {
    let start = Instant::now();

    if user.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    tracing::debug!(name = %user.name, "user logged in");
    Ok(ApiResponse::success(user, start))
}

/// GET /api/users/{user_id} - User details.
pub async fn get_user(Path(user_id): Path<String>) -> ApiResponse<User> {
    let start = Instant::now();
    ApiResponse::success(User { name: user_id }, start)
}

/// GET /api/users - Registered users, oldest first.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<User>>, AppError> {
    let start = Instant::now();
    let users = state.users.list_users().await?;
    Ok(ApiResponse::success(users, start))
}

/// POST /api/users - Register a user.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateUserRequest>,
) -> Result<ApiResponse<User>, AppError> {
    let start = Instant::now();

    let user = state.users.add_user(body).await?;
    let href = format!("/api/users/{}", user.name);

    Ok(ApiResponse::created(user, start).with_link("self", href))
}
