//! # Faqbot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the widget configuration: the
//! greeting, the reply delay, and the knowledge base (entries plus default
//! answer). The result is turned into the runtime types the chat core uses,
//! a `KnowledgeBase` and `WidgetSettings`.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` (used alone when present)
//! 2. Project-specific `.faqbot.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `<config dir>/faqbot/config.toml`
//! 4. Default values defined in the code (the builtin Indusnov FAQ)
//!
//! ## Examples
//!
//! ```toml
//! [widget]
//! title = "Indusnov Chatbot"
//! greeting = "Bonjour ! Comment puis-je vous aider ?"
//! reply_delay_ms = 500
//!
//! [knowledge]
//! default_answer = "Merci, nous avons reçu votre message !"
//!
//! [[knowledge.entries]]
//! keywords = ["bonjour", "salut"]
//! answer = "Bonjour !"
//! ```
//!
//! Leaving `knowledge.entries` out keeps the builtin FAQ.
//!
use crate::chat::controller::WidgetSettings;
use crate::chat::knowledge::{
    KnowledgeBase, KnowledgeEntry, BUILTIN_DEFAULT_ANSWER, BUILTIN_GREETING,
};
use crate::core::error::{FaqbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Delays above this are accepted but almost certainly a typo (seconds vs ms).
const SUSPICIOUS_DELAY_MS: u64 = 60_000;

const PROJECT_CONFIG_FILENAME: &str = ".faqbot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// Presentation and timing of the chat widget.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WidgetConfig {
    /// Header shown above the transcript.
    #[serde(default = "default_title")]
    pub title: String,
    /// Bot message injected the first time the widget opens.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// "Is typing" delay before each bot reply, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

/// The FAQ itself.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    #[serde(default = "default_answer")]
    pub default_answer: String,
    /// Ordered entries. Empty means "use the builtin FAQ".
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    pub keywords: Vec<String>,
    pub answer: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            greeting: default_greeting(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            default_answer: default_answer(),
            entries: Vec::new(),
        }
    }
}

fn default_title() -> String {
    "Indusnov Chatbot".to_string()
}
fn default_greeting() -> String {
    BUILTIN_GREETING.to_string()
}
fn default_reply_delay_ms() -> u64 {
    500
}
fn default_answer() -> String {
    BUILTIN_DEFAULT_ANSWER.to_string()
}

impl Config {
    /// Builds the knowledge base described by this configuration.
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        if self.knowledge.entries.is_empty() {
            debug!("No knowledge entries configured, using builtin FAQ");
            let builtin = KnowledgeBase::builtin();
            return KnowledgeBase::new(builtin.entries().to_vec(), &self.knowledge.default_answer);
        }
        let entries = self
            .knowledge
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                KnowledgeEntry::new(&entry.keywords, &entry.answer)
                    .with_context(|| format!("Invalid knowledge entry #{}", index + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        KnowledgeBase::new(entries, &self.knowledge.default_answer)
    }

    pub fn widget_settings(&self) -> WidgetSettings {
        WidgetSettings {
            greeting: self.widget.greeting.clone(),
            reply_delay: Duration::from_millis(self.widget.reply_delay_ms),
        }
    }
}

/// Loads the configuration from `explicit` if given, otherwise from the
/// user and project files merged over defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Indusnov", "faqbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.faqbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.widget.title = if project_cfg.widget.title != default_title() {
        project_cfg.widget.title
    } else {
        user.widget.title
    };
    merged.widget.greeting = if project_cfg.widget.greeting != default_greeting() {
        project_cfg.widget.greeting
    } else {
        user.widget.greeting
    };
    merged.widget.reply_delay_ms = if project_cfg.widget.reply_delay_ms != default_reply_delay_ms()
    {
        project_cfg.widget.reply_delay_ms
    } else {
        user.widget.reply_delay_ms
    };
    merged.knowledge.default_answer = if project_cfg.knowledge.default_answer != default_answer()
    {
        project_cfg.knowledge.default_answer
    } else {
        user.knowledge.default_answer
    };
    // Entry lists are replaced wholesale, never concatenated: order matters.
    merged.knowledge.entries = if !project_cfg.knowledge.entries.is_empty() {
        project_cfg.knowledge.entries
    } else {
        user.knowledge.entries
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.widget.greeting.trim().is_empty() {
        return Err(anyhow!(FaqbotError::Config(
            "widget.greeting must not be blank.".to_string()
        )));
    }
    if config.knowledge.default_answer.trim().is_empty() {
        return Err(anyhow!(FaqbotError::Config(
            "knowledge.default_answer must not be blank.".to_string()
        )));
    }
    if config.widget.reply_delay_ms > SUSPICIOUS_DELAY_MS {
        warn!(
            "widget.reply_delay_ms is {} ms; replies will take over a minute to appear.",
            config.widget.reply_delay_ms
        );
    }
    config.knowledge_base()?;
    info!("Configuration validation successful.");
    Ok(())
}
