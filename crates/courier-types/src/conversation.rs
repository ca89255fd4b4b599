//! Conversation types for Courier.
//!
//! Conversations are not stored as entities of their own: they are derived
//! from the participant pair of each record.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Summary of one conversation as seen by a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: String,
    /// Participants in the order of the first record seen for this id.
    pub participants: Vec<String>,
    /// Most recent message; absent if only the placeholder was written.
    #[serde(default)]
    pub last_message: Option<Message>,
}

/// Request body for creating a conversation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateConversationRequest {
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Result of creating a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationCreated {
    pub conversation_id: String,
    /// Participants sorted the same way the id was derived.
    pub participants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_missing_participants_defaults_empty() {
        let req: CreateConversationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.participants.is_empty());
    }

    #[test]
    fn test_conversation_serializes_null_last_message() {
        let conv = Conversation {
            conversation_id: "Alice-Bob".to_string(),
            participants: vec!["Alice".to_string(), "Bob".to_string()],
            last_message: None,
        };
        let json = serde_json::to_string(&conv).unwrap();
        assert!(json.contains("\"last_message\":null"));
        let parsed: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, conv);
    }
}
