//! # Faqbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `faqbot` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Ask a single question
//! faqbot ask "Quels sont vos horaires ?"
//!
//! # Chat interactively with a custom FAQ and debug logs
//! faqbot -vv --config ./site-faq.toml chat
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (stderr, so stdout stays clean)
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use faqbot::commands;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "faqbot",
    about = "FAQ chat widget: keyword-matched answers with a typing delay",
    long_about = "Answer visitor questions from a curated FAQ, one-shot or as an\n\
                  interactive chat widget session in the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Use this configuration file instead of the user/project files.
    #[arg(long, global = true, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Print the answer to a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Open an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Inspect the knowledge base.
    Kb(commands::kb::KbArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, config_path).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, config_path).await,
        Commands::Kb(args) => commands::kb::handle_kb(args, config_path).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_global_flags_around_subcommand() {
        let cli = Cli::try_parse_from(["faqbot", "-vv", "ask", "--config", "x.toml", "bonjour"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Ask(args) => assert_eq!(args.query, vec!["bonjour"]),
            _ => panic!("Incorrect subcommand parsed for 'ask'"),
        }
    }

    #[test]
    fn test_ask_requires_a_query() {
        assert!(Cli::try_parse_from(["faqbot", "ask"]).is_err());
    }
}
