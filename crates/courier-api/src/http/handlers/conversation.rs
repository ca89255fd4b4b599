//! Conversation handlers for the REST API.

use std::time::Instant;

use axum::extract::{Path, State};

use courier_types::conversation::{Conversation, ConversationCreated, CreateConversationRequest};
use courier_types::message::{CreateMessageRequest, Message, MessageQuery};

use crate::http::error::AppError;
use crate::http::extractors::json::AppJson;
use crate::http::extractors::query::{AppQuery, ConversationListQuery, required};
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/conversations - Create a conversation between two participants.
pub async fn create_conversation(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateConversationRequest>,
) -> Result<ApiResponse<ConversationCreated>, AppError> {
    let start = Instant::now();

    let created = state.messaging.create_conversation(body).await?;
    let href = format!("/api/conversations/{}/messages", created.conversation_id);

    Ok(ApiResponse::created(created, start).with_link("messages", href))
}

/// GET /api/conversations?name= - Conversations a participant takes part in.
pub async fn list_conversations(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ConversationListQuery>,
) -> Result<ApiResponse<Vec<Conversation>>, AppError> {
    let start = Instant::now();

    let name = required(query.name, "name")?;

    let conversations = state.messaging.list_conversations(&name).await?;
    Ok(ApiResponse::success(conversations, start))
}

/// POST /api/conversations/{conversation_id}/messages - Create a message in a conversation.
pub async fn create_message(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    AppJson(body): AppJson<CreateMessageRequest>,
) -> Result<ApiResponse<Message>, AppError> {
    let start = Instant::now();

    let message = state
        .messaging
        .create_message_in(&conversation_id, body)
        .await?;

    Ok(ApiResponse::created(message, start).with_link(
        "conversation",
        format!("/api/conversations/{conversation_id}/messages"),
    ))
}

/// GET /api/conversations/{conversation_id}/messages - Messages in a conversation.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<ApiResponse<Vec<Message>>, AppError> {
    let start = Instant::now();

    let messages = state
        .messaging
        .list_messages(&MessageQuery::Conversation { conversation_id })
        .await?;

    Ok(ApiResponse::success(messages, start))
}
