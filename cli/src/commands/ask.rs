//! # Faqbot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! One-shot resolution: `faqbot ask <QUERY>...` prints the answer the widget
//! would give, without any delay or session. `--explain` also says which
//! entry and keyword matched, which is handy when editing a FAQ.
//!
//! ```bash
//! faqbot ask "Quels sont vos horaires ?"
//! faqbot ask --explain "parlez-moi d'Indusnov Solutions"
//! ```
//!
use crate::chat::matcher::MatchEngine;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question, as free text. Several words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Also print which knowledge entry and keyword produced the answer.
    #[arg(long)]
    pub explain: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Loads the configuration, builds the knowledge base and prints the answer
/// for the joined query to stdout.
pub async fn handle_ask(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let engine = MatchEngine::new(Arc::new(cfg.knowledge_base()?));
    let query = args.query.join(" ");
    info!("Resolving query: {:?}", query);

    let stdout = io::stdout();
    write_answer(&mut stdout.lock(), &engine, &query, args.explain)
        .context("Failed to write answer to stdout")?;
    Ok(())
}

fn write_answer<W: Write>(
    out: &mut W,
    engine: &MatchEngine,
    query: &str,
    explain: bool,
) -> io::Result<()> {
    writeln!(out, "{}", engine.resolve(query))?;
    if explain {
        match engine.find_match(query) {
            Some(hit) => writeln!(
                out,
                "(matched entry #{} on keyword \"{}\")",
                hit.entry + 1,
                hit.keyword
            )?,
            None => writeln!(out, "(no entry matched, default answer)")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::knowledge::KnowledgeBase;

    fn render(query: &str, explain: bool) -> String {
        let engine = MatchEngine::new(Arc::new(KnowledgeBase::builtin()));
        let mut out = Vec::new();
        write_answer(&mut out, &engine, query, explain).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_answer_only() {
        assert_eq!(
            render("Où est votre adresse ?", false),
            "Nous sommes situés à Technopark, Casablanca, Maroc.\n"
        );
    }

    #[test]
    fn test_explain_match_and_default() {
        let explained = render("indusnov solutions", true);
        assert!(explained.ends_with("(matched entry #6 on keyword \"indusnov\")\n"));

        let fallback = render("quelle météo demain", true);
        assert_eq!(
            fallback,
            "Merci, nous avons reçu votre message !\n(no entry matched, default answer)\n"
        );
    }
}
