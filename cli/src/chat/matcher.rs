//! # Faqbot Match Engine
//!
//! File: cli/src/chat/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Resolves free text to a canned answer. The query is lower-cased and then
//! tested for raw substring containment of each keyword, entries in declared
//! order, keywords in declared order. The first hit wins; no hit yields the
//! knowledge base's default answer.
//!
//! There is no tokenization, trimming or punctuation stripping, so a keyword
//! also matches inside a longer unrelated word ("lieu" in "milieu"). That is
//! the matching policy, not an accident; `KnowledgeBase::shadowed_keywords`
//! is the tool for spotting surprises in a FAQ.
//!
use crate::chat::knowledge::KnowledgeBase;
use std::sync::Arc;
use tracing::debug;

/// Which entry and keyword produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub entry: usize,
    pub keyword: &'a str,
    pub answer: &'a str,
}

/// Pure resolver over a shared knowledge base.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl MatchEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Finds the first matching entry/keyword pair, if any.
    pub fn find_match(&self, query: &str) -> Option<Match<'_>> {
        let normalized = query.to_lowercase();
        self.knowledge
            .entries()
            .iter()
            .enumerate()
            .find_map(|(entry, item)| {
                item.keywords()
                    .iter()
                    .find(|keyword| normalized.contains(keyword.as_str()))
                    .map(|keyword| Match {
                        entry,
                        keyword,
                        answer: item.answer(),
                    })
            })
    }

    /// Maps a query to an answer. Total over all inputs, including `""`.
    pub fn resolve(&self, query: &str) -> &str {
        match self.find_match(query) {
            Some(hit) => {
                debug!(entry = hit.entry, keyword = hit.keyword, "FAQ entry matched");
                hit.answer
            }
            None => {
                debug!("No FAQ entry matched, using default answer");
                self.knowledge.default_answer()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::knowledge::KnowledgeEntry;

    fn engine(entries: Vec<KnowledgeEntry>, default: &str) -> MatchEngine {
        MatchEngine::new(Arc::new(KnowledgeBase::new(entries, default).unwrap()))
    }

    fn hello_engine() -> MatchEngine {
        engine(
            vec![KnowledgeEntry::new(["bonjour"], "Hello!").unwrap()],
            "Thanks!",
        )
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let engine = hello_engine();
        assert_eq!(engine.resolve("Dis BONJOUR à tous"), "Hello!");
        assert_eq!(engine.resolve("au revoir"), "Thanks!");
    }

    #[test]
    fn test_empty_and_whitespace_queries_get_default() {
        let engine = hello_engine();
        assert_eq!(engine.resolve(""), "Thanks!");
        assert_eq!(engine.resolve("   "), "Thanks!");
        assert!(engine.find_match("").is_none());
    }

    #[test]
    fn test_match_inside_longer_word() {
        let engine = engine(
            vec![KnowledgeEntry::new(["lieu"], "Casablanca").unwrap()],
            "d",
        );
        assert_eq!(engine.resolve("au milieu de la nuit"), "Casablanca");
    }

    #[test]
    fn test_first_declared_entry_wins_service_vs_services() {
        // "nos services" contains both keywords; the entry declared first wins.
        let service_first = engine(
            vec![
                KnowledgeEntry::new(["service"], "singular").unwrap(),
                KnowledgeEntry::new(["services"], "plural").unwrap(),
            ],
            "d",
        );
        assert_eq!(service_first.resolve("nos services"), "singular");

        let services_first = engine(
            vec![
                KnowledgeEntry::new(["services"], "plural").unwrap(),
                KnowledgeEntry::new(["service"], "singular").unwrap(),
            ],
            "d",
        );
        assert_eq!(services_first.resolve("nos services"), "plural");
        assert_eq!(services_first.resolve("un service"), "singular");
    }

    #[test]
    fn test_entry_order_beats_keyword_order() {
        // The second keyword of entry 0 wins over the first keyword of entry 1.
        let engine = engine(
            vec![
                KnowledgeEntry::new(["zzz", "prix"], "pricing").unwrap(),
                KnowledgeEntry::new(["prix"], "other").unwrap(),
            ],
            "d",
        );
        let hit = engine.find_match("quel prix ?").unwrap();
        assert_eq!(hit.entry, 0);
        assert_eq!(hit.keyword, "prix");
        assert_eq!(hit.answer, "pricing");
    }

    #[test]
    fn test_first_keyword_within_entry_is_reported() {
        let engine = engine(
            vec![KnowledgeEntry::new(["services", "service"], "offer").unwrap()],
            "d",
        );
        assert_eq!(engine.find_match("nos services").unwrap().keyword, "services");
        assert_eq!(engine.find_match("un service").unwrap().keyword, "service");
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let engine = MatchEngine::new(Arc::new(KnowledgeBase::builtin()));
        let first = engine.resolve("Quels sont vos horaires ?").to_string();
        assert_eq!(engine.resolve("Quels sont vos horaires ?"), first);
        assert_eq!(first, "Nos horaires sont de 9h à 18h, du lundi au vendredi.");
    }

    #[test]
    fn test_builtin_indusnov_solution_resolves_to_company_entry() {
        let engine = MatchEngine::new(Arc::new(KnowledgeBase::builtin()));
        let hit = engine.find_match("Parlez-moi d'Indusnov Solutions").unwrap();
        assert_eq!(hit.entry, 5);
        assert_eq!(hit.keyword, "indusnov");
    }

    #[test]
    fn test_unicode_case_folding() {
        let engine = MatchEngine::new(Arc::new(KnowledgeBase::builtin()));
        assert_eq!(
            engine.resolve("Votre TÉLÉPHONE ?"),
            "Vous pouvez nous contacter au +212 661-185357 ou contact@indusnov.com"
        );
    }
}
