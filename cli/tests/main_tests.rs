//! # Faqbot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `faqbot` binary: standard flags and error
//! reporting for a bad configuration file.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_main_help_flag() {
    faqbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask").and(predicate::str::contains("chat")));
}

#[test]
fn test_main_version_flag() {
    faqbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_config_reports_error() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = write_config(
        temp_dir.path(),
        "[[knowledge.entries]]\nkeywords = []\nanswer = \"orphan\"\n",
    );

    faqbot_cmd()
        .arg("--config")
        .arg(&config)
        .args(["ask", "bonjour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid knowledge entry #1"));
}

#[test]
fn test_missing_config_file_reports_error() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    faqbot_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("nope.toml"))
        .args(["kb", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}
