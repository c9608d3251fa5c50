//! # Faqbot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqbot chat` hosts one chat widget session in the terminal. Lines typed on
//! stdin are submitted to a `ConversationController`; transcript changes are
//! printed as they happen, so bot replies show up after the reply delay just
//! like in the web widget.
//!
//! Lines starting with `/` drive the widget instead of being submitted:
//!
//! | Command   | Effect                                       |
//! |-----------|----------------------------------------------|
//! | `/open`   | Show the widget (greets on first open)       |
//! | `/close`  | Hide the widget, keeping the conversation    |
//! | `/toggle` | Flip between the two                         |
//! | `/reset`  | Cancel pending replies, clear the transcript |
//! | `/help`   | List these commands                          |
//! | `/quit`   | Leave (pending replies are still shown)      |
//!
//! ## Architecture
//!
//! A single `tokio::select!` loop waits on two things: the next stdin line
//! and the controller's change notifications. Nothing is rendered while the
//! widget is closed; reopening renders everything that arrived meanwhile.
//! On EOF or `/quit` the loop stops reading, waits for outstanding replies
//! (`settle`), renders them, and shuts the controller down.
//!
use crate::chat::controller::ConversationController;
use crate::chat::matcher::MatchEngine;
use crate::chat::scheduler::ReplyScheduler;
use crate::chat::session::Visibility;
use crate::common::ui::TranscriptView;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const HELP: &str = "Commands: /open /close /toggle /reset /help /quit. Anything else is sent to the bot.";

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Override the configured reply delay, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Start with the widget closed (use /open to show it).
    #[arg(long)]
    pub closed: bool,

    /// Prefix each message with the local time it was sent (`[HH:MM]`).
    #[arg(long)]
    pub timestamps: bool,
}

enum Flow {
    Continue,
    Reset,
    Quit,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds a controller from the loaded configuration and runs an interactive
/// session over stdin/stdout until EOF or `/quit`.
pub async fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let engine = MatchEngine::new(Arc::new(cfg.knowledge_base()?));
    let mut settings = cfg.widget_settings();
    if let Some(ms) = args.delay_ms {
        settings.reply_delay = Duration::from_millis(ms);
    }
    info!(
        "Starting chat session ({} entries, {:?} reply delay)",
        engine.knowledge().len(),
        settings.reply_delay
    );

    let mut chat = ConversationController::with_tokio(engine, settings)?;
    let view = TranscriptView::new(cfg.widget.title.as_str()).with_timestamps(args.timestamps);
    let input = BufReader::new(tokio::io::stdin());
    let mut out = io::stdout();
    run_session(&mut chat, view, !args.closed, input, &mut out).await
}

/// Drives `chat` from `input` lines, rendering to `out` through `view`.
pub async fn run_session<S, R, W>(
    chat: &mut ConversationController<S>,
    mut view: TranscriptView,
    start_open: bool,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: ReplyScheduler,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut changes = chat.subscribe();
    let mut lines = input.lines();

    writeln!(out, "{} (type /help for commands)", view.bot_name())?;
    if start_open {
        chat.open();
    } else {
        writeln!(out, "(chat is closed, type /open)")?;
    }
    changes.borrow_and_update();
    render(chat, &mut view, out)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("Input closed");
                    break;
                };
                match handle_line(chat, &line, out)? {
                    Flow::Continue => {}
                    Flow::Reset => view.rewind(),
                    Flow::Quit => break,
                }
                render(chat, &mut view, out)?;
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                render(chat, &mut view, out)?;
            }
        }
    }

    chat.settle().await;
    render(chat, &mut view, out)?;
    chat.shutdown();
    Ok(())
}

fn render<S: ReplyScheduler, W: Write>(
    chat: &ConversationController<S>,
    view: &mut TranscriptView,
    out: &mut W,
) -> Result<()> {
    if chat.is_open() {
        let fresh = chat.transcript_since(view.last_rendered());
        view.render_new(out, &fresh)
            .context("Failed to render transcript")?;
    }
    Ok(())
}

fn handle_line<S: ReplyScheduler, W: Write>(
    chat: &mut ConversationController<S>,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    match line.trim() {
        "/quit" | "/exit" => return Ok(Flow::Quit),
        "/open" => {
            chat.open();
        }
        "/close" => {
            chat.close();
            writeln!(out, "(chat closed, type /open to reopen)")?;
        }
        "/toggle" => {
            if chat.toggle() == Visibility::Closed {
                writeln!(out, "(chat closed, type /open to reopen)")?;
            }
        }
        "/reset" => {
            chat.reset();
            writeln!(out, "(conversation cleared, type /open to start again)")?;
            return Ok(Flow::Reset);
        }
        "/help" => writeln!(out, "{}", HELP)?,
        command if command.starts_with('/') => {
            writeln!(out, "Unknown command {}. {}", command, HELP)?;
        }
        _ if !chat.is_open() => {
            writeln!(out, "(chat is closed, type /open first)")?;
        }
        _ => {
            chat.set_pending_input(line);
            chat.submit_pending();
        }
    }
    Ok(Flow::Continue)
}
