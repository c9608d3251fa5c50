//! # Faqbot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! Shared helpers for the terminal front end, kept apart from the command
//! handlers (`commands::`) and the chat core (`chat::`).
//!
//! - **`ui`**: transcript rendering with scroll-to-newest semantics.
//!

/// Terminal rendering of transcripts.
pub mod ui;
