//! Message handlers for the REST API.

use std::time::Instant;

use axum::extract::State;

use courier_core::identity::conversation_id;
use courier_types::message::{CreateMessageRequest, Message, MessageQuery};

use crate::http::error::AppError;
use crate::http::extractors::json::AppJson;
use crate::http::extractors::query::{AppQuery, PairQuery, required};
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/messages - Create a message between two participants.
pub async fn create_message(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateMessageRequest>,
) -> Result<ApiResponse<Message>, AppError> {
    let start = Instant::now();

    let message = state.messaging.create_message(body).await?;
    let conversation = conversation_id(&message.from, &message.to);

    Ok(ApiResponse::created(message, start).with_link(
        "conversation",
        format!("/api/conversations/{conversation}/messages"),
    ))
}

/// GET /api/messages?from=&to= - Messages exchanged between a pair.
pub async fn list_pair_messages(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PairQuery>,
) -> Result<ApiResponse<Vec<Message>>, AppError> {
    let start = Instant::now();

    let from = required(query.from, "from")?;
    let to = required(query.to, "to")?;
    let messages = state
        .messaging
        .list_messages(&MessageQuery::Pair { from, to })
        .await?;

    Ok(ApiResponse::success(messages, start))
}
