//! # Faqbot Conversation Controller
//!
//! File: cli/src/chat/controller.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The controller is what a host UI talks to. It owns one
//! `ConversationSession`, the match engine, and a `ReplyScheduler`, and turns
//! host actions (`open`, `close`, `toggle`, `submit`) into session
//! transitions plus scheduled bot replies.
//!
//! ## Architecture
//!
//! - The session lives behind an `Arc<Mutex<_>>` shared with this
//!   controller's own reply tasks and nobody else.
//! - `submit` appends the user's message and clears the input synchronously,
//!   then schedules `resolve(text)` after the configured delay.
//! - Every transcript change bumps a revision on a `tokio::sync::watch`
//!   channel. Hosts subscribe, re-render, and scroll to the newest message.
//! - Outstanding reply tasks are cancelled on `reset`, `shutdown`, and drop,
//!   so nothing writes into a session after the widget is gone.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use faqbot::chat::controller::{ConversationController, WidgetSettings};
//! use faqbot::chat::knowledge::KnowledgeBase;
//! use faqbot::chat::matcher::MatchEngine;
//! use std::sync::Arc;
//!
//! # async fn run() -> faqbot::core::error::Result<()> {
//! let engine = MatchEngine::new(Arc::new(KnowledgeBase::builtin()));
//! let mut chat = ConversationController::with_tokio(engine, WidgetSettings::default())?;
//! chat.open();
//! chat.submit("Quels sont vos horaires ?");
//! chat.settle().await;
//! for message in chat.transcript() {
//!     println!("{:?}: {}", message.author, message.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::chat::knowledge::BUILTIN_GREETING;
use crate::chat::matcher::MatchEngine;
use crate::chat::scheduler::{ReplyScheduler, ScheduledTask, TokioScheduler};
use crate::chat::session::{ConversationSession, PendingReply, Visibility};
use crate::chat::transcript::{Message, MessageId};
use crate::core::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// Delay before a bot reply appears.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Counter bumped on every transcript change.
pub type Revision = u64;

/// Per-widget behaviour that is not part of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    pub greeting: String,
    pub reply_delay: Duration,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            greeting: BUILTIN_GREETING.to_string(),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}

#[derive(Debug)]
struct Shared {
    session: Mutex<ConversationSession>,
    changes: watch::Sender<Revision>,
}

impl Shared {
    fn session(&self) -> MutexGuard<'_, ConversationSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changes.send_modify(|revision| *revision += 1);
    }

    fn deliver(&self, reply: &PendingReply, answer: String) {
        let appended = self.session().complete_reply(reply.epoch, reply.seq, answer);
        if !appended.is_empty() {
            debug!(?appended, "Bot reply appended");
            self.notify();
        }
    }
}

/// State machine driving one chat widget.
pub struct ConversationController<S: ReplyScheduler = TokioScheduler> {
    shared: Arc<Shared>,
    engine: MatchEngine,
    settings: WidgetSettings,
    scheduler: S,
    outstanding: Vec<ScheduledTask>,
}

impl ConversationController<TokioScheduler> {
    /// Builds a controller that schedules replies on the current tokio runtime.
    pub fn with_tokio(engine: MatchEngine, settings: WidgetSettings) -> Result<Self> {
        Ok(Self::new(engine, settings, TokioScheduler::current()?))
    }
}

impl<S: ReplyScheduler> ConversationController<S> {
    pub fn new(engine: MatchEngine, settings: WidgetSettings, scheduler: S) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                session: Mutex::new(ConversationSession::new()),
                changes,
            }),
            engine,
            settings,
            scheduler,
            outstanding: Vec::new(),
        }
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    pub fn visibility(&self) -> Visibility {
        self.shared.session().visibility()
    }

    pub fn is_open(&self) -> bool {
        self.shared.session().is_open()
    }

    /// Shows the widget. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        let (opened, greeted) = {
            let mut session = self.shared.session();
            let was_open = session.is_open();
            (!was_open, session.open(&self.settings.greeting))
        };
        if opened {
            info!("Chat widget opened");
        }
        if greeted.is_some() {
            self.shared.notify();
        }
        opened
    }

    /// Hides the widget. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let closed = self.shared.session().close();
        if closed {
            info!("Chat widget closed");
        }
        closed
    }

    pub fn toggle(&mut self) -> Visibility {
        let (greeted, visibility) = {
            let mut session = self.shared.session();
            let greeted = session.toggle(&self.settings.greeting);
            (greeted, session.visibility())
        };
        info!(?visibility, "Chat widget toggled");
        if greeted.is_some() {
            self.shared.notify();
        }
        visibility
    }

    pub fn pending_input(&self) -> String {
        self.shared.session().pending_input().to_string()
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.shared.session().set_pending_input(text);
    }

    /// Submits whatever is in the input field.
    pub fn submit_pending(&mut self) -> Option<MessageId> {
        let text = self.pending_input();
        self.submit(&text)
    }

    /// Appends the user's message now and the bot's answer after the delay.
    ///
    /// Blank text is ignored and yields `None`. Otherwise returns the id of
    /// the user message.
    pub fn submit(&mut self, text: &str) -> Option<MessageId> {
        let pending = self.shared.session().begin_submit(text)?;
        let user_message = pending.user_message;
        debug!(id = %user_message, "User message appended");
        self.shared.notify();

        self.outstanding.retain(|task| !task.is_finished());
        let shared = Arc::clone(&self.shared);
        let engine = self.engine.clone();
        let task = self.scheduler.schedule(
            self.settings.reply_delay,
            Box::new(move || {
                let answer = engine.resolve(&pending.query).to_string();
                shared.deliver(&pending, answer);
            }),
        );
        self.outstanding.push(task);
        Some(user_message)
    }

    /// Snapshot of the transcript for rendering.
    pub fn transcript(&self) -> Vec<Message> {
        self.shared.session().transcript().messages().to_vec()
    }

    /// Messages appended after `id` (all of them for `None`).
    pub fn transcript_since(&self, id: Option<MessageId>) -> Vec<Message> {
        self.shared.session().transcript().since(id).to_vec()
    }

    /// Change notifications; the value is a revision counter.
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.shared.changes.subscribe()
    }

    /// Replies requested but not yet in the transcript.
    pub fn pending_replies(&self) -> u64 {
        self.shared.session().outstanding_replies()
    }

    /// Waits until every requested reply has been appended.
    pub async fn settle(&self) {
        let mut changes = self.subscribe();
        while self.pending_replies() > 0 {
            if changes.changed().await.is_err() {
                return;
            }
        }
    }

    /// Cancels pending replies and returns to a fresh, closed session.
    pub fn reset(&mut self) {
        self.cancel_outstanding();
        self.shared.session().reset();
        info!("Chat session reset");
        self.shared.notify();
    }

    /// Cancels pending replies. The transcript is left as it is.
    pub fn shutdown(&mut self) {
        self.abandon_outstanding();
        self.shared.notify();
    }

    fn abandon_outstanding(&mut self) {
        self.cancel_outstanding();
        self.shared.session().abandon_replies();
    }

    fn cancel_outstanding(&mut self) {
        let count = self.outstanding.len();
        for task in self.outstanding.drain(..) {
            task.cancel();
        }
        if count > 0 {
            debug!(count, "Cancelled outstanding reply tasks");
        }
    }
}

impl<S: ReplyScheduler> Drop for ConversationController<S> {
    fn drop(&mut self) {
        self.abandon_outstanding();
    }
}
