//! # Faqbot Transcript
//!
//! File: cli/src/chat/transcript.rs
//! Author: Christi Mahu
//!
//! Append-only log of the messages exchanged in one widget session.
//! Insertion order is display order is chronological order. The transcript
//! allocates message ids itself so that they are unique and strictly
//! increasing for as long as it lives.
//!
use chrono::{DateTime, Utc};
use std::fmt;

/// Identifier of a message, unique and increasing within a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// An immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub author: Author,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn is_bot(&self) -> bool {
        self.author == Author::Bot
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    last_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message with a freshly allocated id and returns that id.
    pub fn append(&mut self, author: Author, text: impl Into<String>) -> MessageId {
        self.last_id += 1;
        let id = MessageId(self.last_id);
        self.messages.push(Message {
            id,
            text: text.into(),
            author,
            sent_at: Utc::now(),
        });
        id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Messages appended after `id`, oldest first.
    pub fn since(&self, id: Option<MessageId>) -> &[Message] {
        match id {
            None => &self.messages,
            Some(id) => {
                let start = self.messages.partition_point(|m| m.id <= id);
                &self.messages[start..]
            }
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
