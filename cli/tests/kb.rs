//! # Faqbot CLI Knowledge Base Integration Tests
//!
//! File: cli/tests/kb.rs
//! Author: Christi Mahu
//!
//! Integration tests for `faqbot kb list` and `faqbot kb check`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_kb_list_shows_entries_in_order() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), TEST_CONFIG);

    faqbot_cmd()
        .arg("--config")
        .arg(&config)
        .args(["kb", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(" 1. [bonjour]")
                .and(predicate::str::contains(" 3. [services]"))
                .and(predicate::str::contains("Default answer: Thanks!")),
        );
}

#[test]
fn test_kb_check_reports_shadowing() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), TEST_CONFIG);

    faqbot_cmd()
        .arg("--config")
        .arg(&config)
        .args(["kb", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "keyword \"services\" (entry #3) never matches first",
        ));
}

#[test]
fn test_kb_check_strict_fails_on_shadowing() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), TEST_CONFIG);

    faqbot_cmd()
        .arg("--config")
        .arg(&config)
        .args(["kb", "check", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 shadowed keyword(s)"));
}

#[test]
fn test_kb_check_strict_passes_clean_faq() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = write_config(
        temp_dir.path(),
        "[[knowledge.entries]]\nkeywords = [\"prix\"]\nanswer = \"Sur devis.\"\n",
    );

    faqbot_cmd()
        .arg("--config")
        .arg(&config)
        .args(["kb", "check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shadowed keywords."));
}
