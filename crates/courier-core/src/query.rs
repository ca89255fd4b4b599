//! Query engine over the record log.
//!
//! Every query is a full linear scan of [`RecordStore::scan`]; results keep
//! the store's insertion order, which is chronological order for an
//! append-only single-writer log. Conversation placeholders are never
//! returned as messages.

use std::collections::HashMap;

use courier_types::config::PairPolicy;
use courier_types::conversation::Conversation;
use courier_types::error::MessagingError;
use courier_types::message::Message;
use courier_types::record::Record;
use tracing::debug;

use crate::identity::conversation_id;
use crate::repository::record::RecordStore;

/// Read-side queries bound to a store and a pair matching policy.
pub struct QueryEngine<'a, S: RecordStore> {
    store: &'a S,
    policy: PairPolicy,
}

impl<'a, S: RecordStore> QueryEngine<'a, S> {
    pub fn new(store: &'a S, policy: PairPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> PairPolicy {
        self.policy
    }

    /// Messages exchanged between `from` and `to`.
    ///
    /// Under [`PairPolicy::Directional`] an empty result is
    /// `MessagingError::NotFound`; under [`PairPolicy::Symmetric`] it is an
    /// empty list.
    pub async fn messages_between(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<Message>, MessagingError> {
        let records = self.store.scan().await?;
        let scanned = records.len();

        let messages: Vec<Message> = records
            .into_iter()
            .filter(|r| !r.is_placeholder() && pair_matches(r, from, to, self.policy))
            .map(Message::from)
            .collect();

        debug!(
            from,
            to,
            policy = %self.policy,
            scanned,
            matched = messages.len(),
            "pair query"
        );

        if messages.is_empty() && self.policy == PairPolicy::Directional {
            return Err(MessagingError::NotFound(format!(
                "no messages from '{from}' to '{to}'"
            )));
        }
        Ok(messages)
    }

    /// Messages whose derived conversation id equals `id`. Empty is not an error.
    pub async fn messages_in_conversation(
        &self,
        id: &str,
    ) -> Result<Vec<Message>, MessagingError> {
        let records = self.store.scan().await?;

        let messages: Vec<Message> = records
            .into_iter()
            .filter(|r| !r.is_placeholder() && conversation_id(&r.from, &r.to) == id)
            .map(Message::from)
            .collect();

        debug!(conversation_id = id, matched = messages.len(), "conversation query");
        Ok(messages)
    }

    /// One summary per conversation `name` takes part in.
    pub async fn conversations_for(&self, name: &str) -> Result<Vec<Conversation>, MessagingError> {
        let records = self.store.scan().await?;
        let conversations = summarize_conversations(records, name);
        debug!(name, found = conversations.len(), "conversation listing");
        Ok(conversations)
    }
}

/// Whether `record` belongs to the pair `(from, to)` under `policy`.
pub fn pair_matches(record: &Record, from: &str, to: &str, policy: PairPolicy) -> bool {
    match policy {
        PairPolicy::Directional => record.from == from && record.to == to,
        PairPolicy::Symmetric => {
            conversation_id(&record.from, &record.to) == conversation_id(from, to)
        }
    }
}

/// Group the records `name` takes part in by derived conversation id.
///
/// Conversations come out in order of first appearance. The participant
/// list is taken from the first record seen for an id; `last_message` is the
/// last message record seen for it.
pub fn summarize_conversations(records: Vec<Record>, name: &str) -> Vec<Conversation> {
    let mut conversations: Vec<Conversation> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.from != name && record.to != name {
            continue;
        }

        let id = conversation_id(&record.from, &record.to);
        let slot = *index.entry(id.clone()).or_insert_with(|| {
            conversations.push(Conversation {
                conversation_id: id,
                participants: vec![record.from.clone(), record.to.clone()],
                last_message: None,
            });
            conversations.len() - 1
        });

        if !record.is_placeholder() {
            if let Some(conversation) = conversations.get_mut(slot) {
                conversation.last_message = Some(Message::from(record));
            }
        }
    }

    conversations
}
