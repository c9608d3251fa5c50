//! # Faqbot Knowledge Base
//!
//! File: cli/src/chat/knowledge.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The knowledge base is the curated FAQ the widget answers from: an ordered
//! list of entries, each mapping a set of trigger keywords to one canned
//! answer, plus a default answer for anything that matches nothing.
//!
//! It is built once (from configuration or from the builtin FAQ), validated at
//! construction time, and never mutated afterwards. Callers share it behind an
//! `Arc` across as many sessions as they like.
//!
//! Declaration order is significant. Entries are evaluated in the order they
//! were declared, and keywords inside an entry likewise; the first hit wins.
//! `shadowed_keywords` reports keywords that can never be the first hit
//! because an earlier entry owns a substring of them.
//!
use crate::core::error::{FaqbotError, Result};
use tracing::debug;

/// Default answer of the builtin FAQ.
pub const BUILTIN_DEFAULT_ANSWER: &str = "Merci, nous avons reçu votre message !";

/// Greeting shown by the builtin widget when it is first opened.
pub const BUILTIN_GREETING: &str =
    "Bonjour ! Je suis le chatbot d'Indusnov. Comment puis-je vous aider ?";

const BUILTIN_FAQ: &[(&[&str], &str)] = &[
    (
        &["bonjour", "salut", "hello"],
        "Bonjour ! Je suis le chatbot d'Indusnov. Comment puis-je vous aider ?",
    ),
    (
        &["horaires", "ouvert", "fermé"],
        "Nos horaires sont de 9h à 18h, du lundi au vendredi.",
    ),
    (
        &["adresse", "lieu"],
        "Nous sommes situés à Technopark, Casablanca, Maroc.",
    ),
    (
        &["services", "service"],
        "Nous offrons développement web, marketing digital, consulting, et solutions industrielles.",
    ),
    (
        &["contact", "email", "téléphone"],
        "Vous pouvez nous contacter au +212 661-185357 ou contact@indusnov.com",
    ),
    (
        &["indusnov"],
        "Indusnov est une société spécialisée dans les solutions industrielles et le développement de projets innovants.",
    ),
    (
        &["indusnov solution"],
        "Indusnov Solutions propose des services dans l'industrie, l'automatisation, la transformation digitale et le marketing.",
    ),
    (
        &["industriel", "industrie"],
        "Nous proposons des solutions industrielles complètes: automatisation, consulting, gestion de projets et services techniques.",
    ),
];

/// One keyword-set-to-answer mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    keywords: Vec<String>,
    answer: String,
}

impl KnowledgeEntry {
    /// Builds an entry, lower-casing every keyword.
    ///
    /// Fails if there are no keywords, if any keyword is blank, or if the
    /// answer is blank. Keyword order is preserved exactly as given.
    pub fn new<I, S>(keywords: I, answer: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        let answer = answer.into();

        if keywords.is_empty() {
            return Err(FaqbotError::KnowledgeBase("entry has no keywords".into()).into());
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(FaqbotError::KnowledgeBase(format!(
                "entry {:?} contains a blank keyword",
                keywords
            ))
            .into());
        }
        if answer.trim().is_empty() {
            return Err(FaqbotError::KnowledgeBase(format!(
                "entry {:?} has a blank answer",
                keywords
            ))
            .into());
        }

        Ok(Self { keywords, answer })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// A keyword that can never be the first match, because an earlier entry
/// declares a keyword contained in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowing {
    /// Index of the entry owning the unreachable keyword.
    pub entry: usize,
    pub keyword: String,
    /// Index of the earlier entry that always wins instead.
    pub by_entry: usize,
    pub by_keyword: String,
}

/// Ordered, immutable FAQ plus its default answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    default_answer: String,
}

impl KnowledgeBase {
    /// Creates a knowledge base from already validated entries.
    ///
    /// An empty entry list is allowed: every query then resolves to the
    /// default answer. The default answer itself must not be blank.
    pub fn new(entries: Vec<KnowledgeEntry>, default_answer: impl Into<String>) -> Result<Self> {
        let default_answer = default_answer.into();
        if default_answer.trim().is_empty() {
            return Err(
                FaqbotError::KnowledgeBase("default answer must not be blank".into()).into(),
            );
        }
        debug!("Knowledge base built with {} entries", entries.len());
        Ok(Self {
            entries,
            default_answer,
        })
    }

    /// The Indusnov FAQ the website widget ships with.
    pub fn builtin() -> Self {
        let entries = BUILTIN_FAQ
            .iter()
            .map(|(keywords, answer)| KnowledgeEntry {
                keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
                answer: (*answer).to_string(),
            })
            .collect();
        Self {
            entries,
            default_answer: BUILTIN_DEFAULT_ANSWER.to_string(),
        }
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists every keyword that loses to a keyword of an earlier entry.
    ///
    /// Keywords shadowed within their own entry are not reported: whichever
    /// of them hits, the answer is the same.
    pub fn shadowed_keywords(&self) -> Vec<Shadowing> {
        let mut found = Vec::new();
        for (entry_idx, entry) in self.entries.iter().enumerate() {
            for keyword in &entry.keywords {
                let winner = self.entries[..entry_idx]
                    .iter()
                    .enumerate()
                    .find_map(|(earlier_idx, earlier)| {
                        earlier
                            .keywords
                            .iter()
                            .find(|k| keyword.contains(k.as_str()))
                            .map(|k| (earlier_idx, k))
                    });
                if let Some((by_entry, by_keyword)) = winner {
                    found.push(Shadowing {
                        entry: entry_idx,
                        keyword: keyword.clone(),
                        by_entry,
                        by_keyword: by_keyword.clone(),
                    });
                }
            }
        }
        found
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
