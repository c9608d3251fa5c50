//! # Faqbot Knowledge Base Check Command
//!
//! File: cli/src/commands/kb/check.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Loading the configuration already rejects malformed entries (no keywords,
//! blank keywords or answers). On top of that, `check` looks for keywords
//! that can never win: matching is first-hit substring containment in
//! declaration order, so a keyword containing a keyword of an earlier entry
//! is always beaten by that earlier entry. The builtin FAQ has one such case,
//! "indusnov solution" behind "indusnov".
//!
//! Shadowing is reported, not fixed. With `--strict` it becomes an error,
//! which is useful in CI for a site's FAQ file.
//!
use crate::chat::knowledge::{KnowledgeBase, Shadowing};
use crate::core::config;
use crate::core::error::{FaqbotError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// # Check Knowledge Base Arguments (`CheckArgs`)
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Fail if any keyword is shadowed by an earlier entry.
    #[arg(long)]
    pub strict: bool,
}

/// # Handle Knowledge Base Check Command (`handle_check`)
pub async fn handle_check(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let kb = cfg.knowledge_base()?;
    let shadowed = kb.shadowed_keywords();
    for s in &shadowed {
        warn!(
            entry = s.entry + 1,
            keyword = %s.keyword,
            by_entry = s.by_entry + 1,
            "Shadowed keyword"
        );
    }

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &kb, &shadowed).context("Failed to write check report")?;

    if args.strict && !shadowed.is_empty() {
        return Err(anyhow!(FaqbotError::KnowledgeBase(format!(
            "{} shadowed keyword(s)",
            shadowed.len()
        ))));
    }
    Ok(())
}

fn write_report<W: Write>(
    out: &mut W,
    kb: &KnowledgeBase,
    shadowed: &[Shadowing],
) -> io::Result<()> {
    let keyword_count: usize = kb.entries().iter().map(|e| e.keywords().len()).sum();
    writeln!(
        out,
        "Knowledge base OK: {} entries, {} keywords.",
        kb.len(),
        keyword_count
    )?;
    for s in shadowed {
        writeln!(
            out,
            "warning: keyword \"{}\" (entry #{}) never matches first; \"{}\" (entry #{}) wins",
            s.keyword,
            s.entry + 1,
            s.by_keyword,
            s.by_entry + 1
        )?;
    }
    if shadowed.is_empty() {
        writeln!(out, "No shadowed keywords.")?;
    }
    Ok(())
}
