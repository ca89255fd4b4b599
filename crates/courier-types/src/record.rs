//! Flat store record and column layout types.
//!
//! A `Record` is one row of the append-only log: the union of the message
//! and conversation-placeholder fields. `Column` names the columns a
//! deployment may carry in its header row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A column of the record log header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Id,
    From,
    To,
    Subject,
    Content,
    Timestamp,
}

impl Column {
    /// Header cell text for this column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::From => "from",
            Column::To => "to",
            Column::Subject => "subject",
            Column::Content => "content",
            Column::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = String;

    /// Accepts the legacy `from_name` / `to_name` header cells as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Column::Id),
            "from" | "from_name" => Ok(Column::From),
            "to" | "to_name" => Ok(Column::To),
            "subject" => Ok(Column::Subject),
            "content" => Ok(Column::Content),
            "timestamp" => Ok(Column::Timestamp),
            other => Err(format!("unknown column: '{other}'")),
        }
    }
}

/// Columns every record log must carry.
///
/// Placeholders are told apart from messages by empty content, so a layout
/// without `content` could never return a message.
pub const REQUIRED_COLUMNS: [Column; 3] = [Column::From, Column::To, Column::Content];

/// Column set written by a fresh store when no deployment override exists.
pub const DEFAULT_COLUMNS: [Column; 6] = [
    Column::Id,
    Column::From,
    Column::To,
    Column::Subject,
    Column::Content,
    Column::Timestamp,
];

/// One row of the record log.
///
/// Message records carry non-empty `content`. Conversation placeholders
/// (written when a conversation is created) carry the conversation id as
/// `id`, the sorted participants, and empty `content`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub from: String,
    pub to: String,
    pub subject: Option<String>,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Record {
    /// Build a conversation placeholder row.
    pub fn placeholder(conversation_id: &str, first: &str, second: &str) -> Self {
        Self {
            id: conversation_id.to_string(),
            from: first.to_string(),
            to: second.to_string(),
            subject: None,
            content: String::new(),
            timestamp: None,
        }
    }

    /// True for rows written by conversation creation rather than a message.
    pub fn is_placeholder(&self) -> bool {
        self.content.is_empty()
    }

    /// Render the value stored under `column` as a CSV cell.
    pub fn field(&self, column: Column) -> String {
        match column {
            Column::Id => self.id.clone(),
            Column::From => self.from.clone(),
            Column::To => self.to.clone(),
            Column::Subject => self.subject.clone().unwrap_or_default(),
            Column::Content => self.content.clone(),
            Column::Timestamp => self
                .timestamp
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_roundtrip() {
        for column in DEFAULT_COLUMNS {
            let parsed: Column = column.to_string().parse().unwrap();
            assert_eq!(column, parsed);
        }
    }

    #[test]
    fn test_column_legacy_names() {
        assert_eq!("from_name".parse::<Column>().unwrap(), Column::From);
        assert_eq!(" TO_NAME ".parse::<Column>().unwrap(), Column::To);
        assert!("recipient".parse::<Column>().is_err());
    }

    #[test]
    fn test_column_serde() {
        let json = serde_json::to_string(&Column::Timestamp).unwrap();
        assert_eq!(json, "\"timestamp\"");
    }

    #[test]
    fn test_default_columns_cover_required() {
        for column in REQUIRED_COLUMNS {
            assert!(DEFAULT_COLUMNS.contains(&column), "{column} missing");
        }
    }

    #[test]
    fn test_placeholder_record() {
        let record = Record::placeholder("Alice-Bob", "Alice", "Bob");
        assert!(record.is_placeholder());
        assert_eq!(record.id, "Alice-Bob");
        assert_eq!(record.field(Column::Subject), "");
        assert_eq!(record.field(Column::Timestamp), "");
    }

    #[test]
    fn test_field_renders_timestamp_rfc3339() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = Record {
            id: "m1".to_string(),
            from: "Alice".to_string(),
            to: "Bob".to_string(),
            subject: Some("Hello".to_string()),
            content: "Hi Bob!".to_string(),
            timestamp: Some(ts),
        };
        assert!(!record.is_placeholder());
        assert_eq!(record.field(Column::Timestamp), "2024-05-01T12:00:00+00:00");
        assert_eq!(record.field(Column::Subject), "Hello");
    }
}
