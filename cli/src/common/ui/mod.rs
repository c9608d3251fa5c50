//! # Faqbot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal rendering for the chat host. A terminal has no scroll position to
//! manage, so "scroll to the newest message" becomes "print everything the
//! reader has not seen yet": `TranscriptView` remembers the last message it
//! rendered and prints only what came after it.
//!
//! Bot messages are left-aligned under the widget title, user messages are
//! prefixed with `>`, mirroring the left/right bubbles of the web widget.
//! With timestamps enabled every line starts with the local `[HH:MM]` the
//! message was appended at.
//!
use crate::chat::transcript::{Author, Message, MessageId};
use chrono::Local;
use std::io::{self, Write};

/// Remembers how far the transcript has been rendered.
#[derive(Debug, Clone)]
pub struct TranscriptView {
    bot_name: String,
    timestamps: bool,
    last_rendered: Option<MessageId>,
}

impl TranscriptView {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            timestamps: false,
            last_rendered: None,
        }
    }

    /// Prefix every rendered line with the time it was sent.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    pub fn last_rendered(&self) -> Option<MessageId> {
        self.last_rendered
    }

    /// Forget what was rendered, e.g. after the session was reset.
    pub fn rewind(&mut self) {
        self.last_rendered = None;
    }

    /// Renders messages newer than the last rendered one and advances the
    /// cursor to the newest. Returns how many messages were written.
    pub fn render_new<W: Write>(&mut self, out: &mut W, messages: &[Message]) -> io::Result<usize> {
        let since = self.last_rendered;
        let mut written = 0;
        for message in messages
            .iter()
            .filter(|m| since.map_or(true, |last| m.id > last))
        {
            let line = format_message(&self.bot_name, message);
            if self.timestamps {
                writeln!(out, "{} {}", format_timestamp(message), line)?;
            } else {
                writeln!(out, "{}", line)?;
            }
            self.last_rendered = Some(message.id);
            written += 1;
        }
        out.flush()?;
        Ok(written)
    }
}

/// `[HH:MM]` of the message in local time.
pub fn format_timestamp(message: &Message) -> String {
    message
        .sent_at
        .with_timezone(&Local)
        .format("[%H:%M]")
        .to_string()
}

/// One transcript line.
pub fn format_message(bot_name: &str, message: &Message) -> String {
    match message.author {
        Author::Bot => format!("{}: {}", bot_name, message.text),
        Author::User => format!("> {}", message.text),
    }
}
