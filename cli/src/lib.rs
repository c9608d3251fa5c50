//! # Faqbot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! The FAQ chat widget core (`chat`), its configuration and error
//! infrastructure (`core`), and the terminal front end used by the `faqbot`
//! binary (`commands`, `common`). Exposed as a library so integration tests
//! and other hosts can drive a `ConversationController` directly.
//!

pub mod chat;
pub mod commands;
pub mod common;
pub mod core;
