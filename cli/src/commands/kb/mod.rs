//! # Faqbot Knowledge Base Command Group
//!
//! File: cli/src/commands/kb/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point and router for `faqbot kb`. The subcommands inspect the
//! knowledge base the chat widget would use with the current configuration:
//! - `list`: print every entry in evaluation order, then the default answer
//! - `check`: validate the configuration and report shadowed keywords
//!
//! ## Examples
//!
//! ```bash
//! faqbot kb list
//! faqbot --config ./site-faq.toml kb check --strict
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Contains the handler and arguments for `faqbot kb check`.
mod check;
/// Contains the handler and arguments for `faqbot kb list`.
mod list;

/// # Knowledge Base Command Group Arguments (`KbArgs`)
#[derive(Parser, Debug)]
pub struct KbArgs {
    #[command(subcommand)]
    command: KbCommand,
}

#[derive(Subcommand, Debug)]
enum KbCommand {
    /// Lists knowledge entries in the order they are evaluated.
    List(list::ListArgs),
    /// Validates the knowledge base and reports unreachable keywords.
    Check(check::CheckArgs),
}

/// # Handle Knowledge Base Command (`handle_kb`)
///
/// Dispatches to the selected subcommand handler.
pub async fn handle_kb(args: KbArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        KbCommand::List(args) => list::handle_list(args, config_path).await?,
        KbCommand::Check(args) => check::handle_check(args, config_path).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_kb_list() {
        let result = KbArgs::try_parse_from(["kb", "list"]);
        assert!(matches!(result.unwrap().command, KbCommand::List(_)));
    }

    #[test]
    fn test_parses_kb_check_strict() {
        let result = KbArgs::try_parse_from(["kb", "check", "--strict"]);
        match result.unwrap().command {
            KbCommand::Check(args) => assert!(args.strict),
            _ => panic!("Incorrect subcommand parsed for 'check'"),
        }
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(KbArgs::try_parse_from(["kb", "edit"]).is_err());
    }
}
