//! Conversation state
//!
//! An append-only log of exchanged messages with sender attribution and
//! timestamps. Messages are immutable once appended; there is no edit,
//! reorder, or delete operation, so insertion order is chronological order
//! is display order.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// A single conversation entry.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Append-only message log with monotonically increasing ids.
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a user-authored message and return a copy of the stored entry.
    pub fn append_user(&mut self, text: impl Into<String>) -> Message {
        self.append(Sender::User, text.into())
    }

    /// Append an assistant-authored message and return a copy of the stored
    /// entry.
    pub fn append_assistant(&mut self, text: impl Into<String>) -> Message {
        self.append(Sender::Assistant, text.into())
    }

    fn append(&mut self, sender: Sender, text: String) -> Message {
        let message = Message {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[allow(dead_code)] // Used in tests
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
