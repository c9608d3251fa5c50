//! # Faqbot Chat Core
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The FAQ chat widget without any UI: it takes free-text input, resolves it
//! against a curated knowledge base, keeps the conversation transcript, and
//! delays each bot reply to imitate typing.
//!
//! ## Architecture
//!
//! Leaves first:
//! - `knowledge`: ordered keyword→answer entries plus a default answer
//! - `matcher`: pure resolution of a query against the knowledge base
//! - `transcript`: append-only message log with increasing ids
//! - `session`: visibility, transcript and input state with explicit transitions
//! - `scheduler`: delayed, cancellable reply tasks
//! - `controller`: the host-facing state machine tying it all together
//!
//! Control flow: `controller.submit(text)` appends the user message, then the
//! scheduler runs `matcher.resolve(text)` after the reply delay and the answer
//! is appended as a bot message.
//!

pub mod controller;
pub mod knowledge;
pub mod matcher;
pub mod scheduler;
pub mod session;
pub mod transcript;
