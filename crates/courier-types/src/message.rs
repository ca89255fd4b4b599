//! Message domain types for Courier.
//!
//! Defines the `Message` value returned by queries, the create request
//! accepted from clients, and the two message query shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A message between two named participants.
///
/// Immutable once written. Participant names are free text and are not
/// checked against any user registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(alias = "from_name")]
    pub from: String,
    #[serde(alias = "to_name")]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<Record> for Message {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            from: record.from,
            to: record.to,
            subject: record.subject,
            content: record.content,
            timestamp: record.timestamp,
        }
    }
}

impl From<&Message> for Record {
    fn from(msg: &Message) -> Self {
        Self {
            id: msg.id.clone(),
            from: msg.from.clone(),
            to: msg.to.clone(),
            subject: msg.subject.clone(),
            content: msg.content.clone(),
            timestamp: msg.timestamp,
        }
    }
}

/// Request body for creating a message.
///
/// `id` and `timestamp` are filled in by the service when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(alias = "from_name")]
    pub from: String,
    #[serde(alias = "to_name")]
    pub to: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub content: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// The two ways of asking for messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageQuery {
    /// Messages exchanged between two participants.
    Pair { from: String, to: String },
    /// Messages whose derived conversation id equals `conversation_id`.
    Conversation { conversation_id: String },
}
