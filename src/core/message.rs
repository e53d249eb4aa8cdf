//! # Messages
//!
//! The conversation is an append-only list of [`Message`] values.
//! Messages are never edited, removed, or reordered once pushed, so
//! insertion order is display order.

use chrono::Utc;

/// Who wrote a message. Closed set: every renderer matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Assistant,
}

/// Unique, strictly increasing message identifier.
///
/// Derived from the creation timestamp in milliseconds. Two messages created
/// within the same millisecond get consecutive values instead of colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub i64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
}

/// Ordered, append-only conversation history.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    last_id: Option<MessageId>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to it.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        let id = self.next_id(Utc::now().timestamp_millis());
        self.messages.push(Message {
            id,
            sender,
            text: text.into(),
        });
        // Just pushed, so last() is always Some
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn next_id(&mut self, now_millis: i64) -> MessageId {
        let id = match self.last_id {
            Some(MessageId(last)) if now_millis <= last => MessageId(last + 1),
            _ => MessageId(now_millis),
        };
        self.last_id = Some(id);
        id
    }
}
