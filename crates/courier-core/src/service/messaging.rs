//! Messaging service.
//!
//! Orchestrates message and conversation creation and retrieval on top of a
//! [`RecordStore`]. Create requests are validated before the store is
//! touched, so a rejected request never leaves a partial record behind.

use chrono::Utc;
use courier_types::config::PairPolicy;
use courier_types::conversation::{Conversation, ConversationCreated, CreateConversationRequest};
use courier_types::error::MessagingError;
use courier_types::message::{CreateMessageRequest, Message, MessageQuery};
use courier_types::record::Record;
use tracing::info;
use uuid::Uuid;

use crate::identity::{self, SEPARATOR};
use crate::query::QueryEngine;
use crate::repository::record::RecordStore;

/// Service owning the record store and the pair query policy.
///
/// Generic over `RecordStore` to maintain clean architecture -- courier-core
/// never depends on courier-infra.
pub struct MessagingService<S: RecordStore> {
    store: S,
    policy: PairPolicy,
}

impl<S: RecordStore> MessagingService<S> {
    pub fn new(store: S, policy: PairPolicy) -> Self {
        Self { store, policy }
    }

    /// Access the record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> PairPolicy {
        self.policy
    }

    /// Query engine over this service's store and policy.
    pub fn queries(&self) -> QueryEngine<'_, S> {
        QueryEngine::new(&self.store, self.policy)
    }

    /// Truncate the store to header-only. Called once at process start.
    pub async fn initialize(&self) -> Result<(), MessagingError> {
        self.store.initialize().await?;
        info!("record store initialized");
        Ok(())
    }

    /// Create a message.
    ///
    /// Fills in a UUIDv7 id and the current time when the request omits them.
    pub async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> Result<Message, MessagingError> {
        validate_participant(&request.from, "from")?;
        validate_participant(&request.to, "to")?;
        if request.content.trim().is_empty() {
            return Err(MessagingError::Validation(
                "content cannot be empty".to_string(),
            ));
        }

        let id = request
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        let message = Message {
            id,
            from: request.from,
            to: request.to,
            subject: request.subject.filter(|s| !s.is_empty()),
            content: request.content,
            timestamp: Some(request.timestamp.unwrap_or_else(Utc::now)),
        };

        self.store.append(&Record::from(&message)).await?;

        info!(
            message_id = %message.id,
            conversation_id = %identity::conversation_id(&message.from, &message.to),
            "message created"
        );
        Ok(message)
    }

    /// Create a message addressed through a conversation id.
    ///
    /// The id derived from the request's participants must equal
    /// `conversation_id`.
    pub async fn create_message_in(
        &self,
        conversation_id: &str,
        request: CreateMessageRequest,
    ) -> Result<Message, MessagingError> {
        let derived = identity::conversation_id(&request.from, &request.to);
        if derived != conversation_id {
            return Err(MessagingError::Validation(format!(
                "participants belong to conversation '{derived}', not '{conversation_id}'"
            )));
        }
        self.create_message(request).await
    }

    /// Create a conversation between exactly two participants.
    ///
    /// Appends a placeholder record with empty content and returns the
    /// derived conversation id.
    pub async fn create_conversation(
        &self,
        request: CreateConversationRequest,
    ) -> Result<ConversationCreated, MessagingError> {
        let [a, b] = request.participants.as_slice() else {
            return Err(MessagingError::Validation(format!(
                "a conversation needs exactly two participants, got {}",
                request.participants.len()
            )));
        };
        validate_participant(a, "participant")?;
        validate_participant(b, "participant")?;

        let (first, second) = identity::sorted_pair(a, b);
        let conversation_id = identity::conversation_id(first, second);

        self.store
            .append(&Record::placeholder(&conversation_id, first, second))
            .await?;

        info!(conversation_id = %conversation_id, "conversation created");
        Ok(ConversationCreated {
            conversation_id,
            participants: vec![first.to_string(), second.to_string()],
        })
    }

    /// List messages by participant pair or by conversation id.
    pub async fn list_messages(&self, query: &MessageQuery) -> Result<Vec<Message>, MessagingError> {
        match query {
            MessageQuery::Pair { from, to } => self.queries().messages_between(from, to).await,
            MessageQuery::Conversation { conversation_id } => {
                self.queries().messages_in_conversation(conversation_id).await
            }
        }
    }

    /// List the conversations `name` takes part in.
    pub async fn list_conversations(&self, name: &str) -> Result<Vec<Conversation>, MessagingError> {
        self.queries().conversations_for(name).await
    }
}

/// Reject blank names and names containing the id separator.
fn validate_participant(name: &str, field: &str) -> Result<(), MessagingError> {
    if name.trim().is_empty() {
        return Err(MessagingError::Validation(format!("{field} cannot be empty")));
    }
    if identity::contains_separator(name) {
        return Err(MessagingError::Validation(format!(
            "{field} '{name}' must not contain '{SEPARATOR}'"
        )));
    }
    Ok(())
}
