//! # Faqbot Knowledge Base List Command
//!
//! File: cli/src/commands/kb/list.rs
//! Author: Christi Mahu
//!
//! Prints the knowledge base in evaluation order. Entry numbers are 1-based
//! and match the numbers used by `faqbot ask --explain` and `faqbot kb check`.
//!
//! Example output:
//!
//! ```text
//! Knowledge base (2 entries, evaluated top to bottom):
//!
//!  1. [bonjour, salut, hello]
//!     Bonjour ! Je suis le chatbot d'Indusnov. Comment puis-je vous aider ?
//!  2. [horaires, ouvert, fermé]
//!     Nos horaires sont de 9h à 18h, du lundi au vendredi.
//!
//! Default answer: Merci, nous avons reçu votre message !
//! ```
//!
use crate::chat::knowledge::KnowledgeBase;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// # List Knowledge Base Arguments (`ListArgs`)
///
/// No options yet; the struct keeps the subcommand shape consistent.
#[derive(Parser, Debug)]
pub struct ListArgs {}

/// # Handle Knowledge Base List Command (`handle_list`)
pub async fn handle_list(_args: ListArgs, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let kb = cfg.knowledge_base()?;
    info!("Listing {} knowledge entries", kb.len());

    let stdout = io::stdout();
    write_listing(&mut stdout.lock(), &kb).context("Failed to write knowledge base listing")?;
    Ok(())
}

fn write_listing<W: Write>(out: &mut W, kb: &KnowledgeBase) -> io::Result<()> {
    if kb.is_empty() {
        writeln!(out, "Knowledge base is empty; every question gets the default answer.")?;
    } else {
        writeln!(
            out,
            "Knowledge base ({} entries, evaluated top to bottom):\n",
            kb.len()
        )?;
        for (index, entry) in kb.entries().iter().enumerate() {
            writeln!(out, "{:>2}. [{}]", index + 1, entry.keywords().join(", "))?;
            writeln!(out, "    {}", entry.answer())?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Default answer: {}", kb.default_answer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::knowledge::KnowledgeEntry;

    #[test]
    fn test_listing_format() {
        let kb = KnowledgeBase::new(
            vec![
                KnowledgeEntry::new(["Bonjour", "salut"], "Hello!").unwrap(),
                KnowledgeEntry::new(["prix"], "Sur devis.").unwrap(),
            ],
            "Thanks!",
        )
        .unwrap();
        let mut out = Vec::new();
        write_listing(&mut out, &kb).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Knowledge base (2 entries, evaluated top to bottom):\n\n \
             1. [bonjour, salut]\n    Hello!\n \
             2. [prix]\n    Sur devis.\n\nDefault answer: Thanks!\n"
        );
    }

    #[test]
    fn test_empty_listing() {
        let kb = KnowledgeBase::new(vec![], "Thanks!").unwrap();
        let mut out = Vec::new();
        write_listing(&mut out, &kb).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Knowledge base is empty"));
        assert!(printed.ends_with("Default answer: Thanks!\n"));
    }
}
