//! # Faqbot Conversation Session
//!
//! File: cli/src/chat/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `ConversationSession` is the whole state of one chat widget: whether it is
//! open, the transcript, the text sitting in the input field, and the
//! bookkeeping for replies that have been requested but not yet appended.
//!
//! Every change goes through a transition method (`open`, `close`, `toggle`,
//! `begin_submit`, `complete_reply`, `reset`). None of them touch timers or
//! rendering, so the state machine can be driven directly in tests.
//!
//! ## Reply ordering
//!
//! Each accepted submission gets a sequence number. A reply is appended only
//! once every earlier reply has been appended; a reply that completes early is
//! held back until its turn. Replies therefore land in submission order no
//! matter how the timers that produce them are interleaved.
//!
//! Each session also carries an epoch. `reset` and `abandon_replies` move to a
//! new epoch, and a reply tagged with an older epoch is dropped on arrival.
//!
use crate::chat::transcript::{Author, MessageId, Transcript};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Whether the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// A reply that `begin_submit` asked for and `complete_reply` must deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub epoch: u64,
    pub seq: u64,
    /// The user's text as submitted; the reply is resolved from it.
    pub query: String,
    pub user_message: MessageId,
}

#[derive(Debug, Clone, Default)]
pub struct ConversationSession {
    visibility: Visibility,
    transcript: Transcript,
    pending_input: String,
    epoch: u64,
    next_seq: u64,
    next_to_deliver: u64,
    held: BTreeMap<u64, String>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of replies requested but not yet appended.
    pub fn outstanding_replies(&self) -> u64 {
        self.next_seq - self.next_to_deliver
    }

    /// Closed→Open. Returns the greeting's id when one was injected, which
    /// happens only if the transcript is empty at that moment.
    pub fn open(&mut self, greeting: &str) -> Option<MessageId> {
        if self.is_open() {
            return None;
        }
        self.visibility = Visibility::Open;
        if self.transcript.is_empty() {
            let id = self.transcript.append(Author::Bot, greeting);
            debug!("Greeting injected as {}", id);
            Some(id)
        } else {
            None
        }
    }

    /// Open→Closed. The transcript and pending input are kept.
    ///
    /// Returns whether the widget was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.visibility = Visibility::Closed;
        was_open
    }

    /// Flips visibility, injecting the greeting as `open` would.
    pub fn toggle(&mut self, greeting: &str) -> Option<MessageId> {
        match self.visibility {
            Visibility::Open => {
                self.close();
                None
            }
            Visibility::Closed => self.open(greeting),
        }
    }

    /// Appends the user's message and clears the input field.
    ///
    /// Returns `None` without touching anything when `text` is blank.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            trace!("Ignoring blank submission");
            return None;
        }
        let user_message = self.transcript.append(Author::User, text);
        self.pending_input.clear();

        let seq = self.next_seq;
        self.next_seq += 1;
        Some(PendingReply {
            epoch: self.epoch,
            seq,
            query: text.to_string(),
            user_message,
        })
    }

    /// Hands in the answer for reply `seq` of `epoch`.
    ///
    /// Returns the ids of every bot message appended as a result: none if the
    /// reply is stale or must wait for an earlier one, several if it unblocked
    /// replies that were already waiting.
    pub fn complete_reply(&mut self, epoch: u64, seq: u64, answer: String) -> Vec<MessageId> {
        if epoch != self.epoch || seq < self.next_to_deliver || seq >= self.next_seq {
            debug!(epoch, seq, "Dropping stale reply");
            return Vec::new();
        }
        self.held.insert(seq, answer);

        let mut appended = Vec::new();
        while let Some(answer) = self.held.remove(&self.next_to_deliver) {
            appended.push(self.transcript.append(Author::Bot, answer));
            self.next_to_deliver += 1;
        }
        if appended.is_empty() {
            trace!(seq, waiting_for = self.next_to_deliver, "Holding early reply");
        }
        appended
    }

    /// Forgets every outstanding reply; late arrivals will be dropped.
    pub fn abandon_replies(&mut self) {
        self.epoch += 1;
        self.next_to_deliver = self.next_seq;
        self.held.clear();
    }

    /// Back to a fresh, closed session. Message ids restart.
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self {
            epoch,
            ..Self::default()
        };
    }
}
