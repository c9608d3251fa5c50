//! # Faqbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level command groups of the `faqbot` CLI. Each module defines its own
//! clap arguments struct and an async `handle_*` function that `main.rs`
//! dispatches to.
//!
//! ## Command Groups
//!
//! - `ask`: Resolve a single question and print the answer
//! - `chat`: Interactive chat widget session in the terminal
//! - `kb`: Inspect and check the knowledge base
//!

/// One-shot question resolution (`faqbot ask`).
pub mod ask;
/// Interactive widget session (`faqbot chat`).
pub mod chat;
/// Knowledge base inspection (`faqbot kb list`, `faqbot kb check`).
pub mod kb;
