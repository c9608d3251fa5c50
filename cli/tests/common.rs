//! # Faqbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test that
//! runs the binary passes an explicit `--config` file so that a developer's
//! own user or project configuration never leaks into the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Small FAQ used across the CLI tests: one greeting entry and the
/// "service"/"services" pair declared in that order.
pub const TEST_CONFIG: &str = r#"
[widget]
title = "TestBot"
greeting = "Welcome!"
reply_delay_ms = 20

[knowledge]
default_answer = "Thanks!"

[[knowledge.entries]]
keywords = ["bonjour"]
answer = "Hello!"

[[knowledge.entries]]
keywords = ["service"]
answer = "One service."

[[knowledge.entries]]
keywords = ["services"]
answer = "Many services."
"#;

/// # Get Faqbot Command (`faqbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `faqbot` binary.
///
/// ## Panics
/// Panics if the `faqbot` binary cannot be found via `Command::cargo_bin`.
pub fn faqbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("faqbot").expect("Failed to find faqbot binary for testing");
    cmd.env_remove("FAQBOT_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to `faqbot.toml` inside `dir` and returns its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("faqbot.toml");
    fs::write(&path, contents).expect("Failed to write test config");
    path
}
