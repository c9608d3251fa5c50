//! # Faqbot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout faqbot. The widget core
//! itself has almost nothing that can fail: resolving a query is total and a
//! blank submission is silently ignored. Errors therefore come from the
//! surroundings: loading configuration, building a knowledge base from that
//! configuration, and starting the reply scheduler outside a runtime.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FaqbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if entry.keywords.is_empty() {
//!     return Err(FaqbotError::KnowledgeBase(format!("entry {} has no keywords", index)))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the faqbot application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FaqbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid knowledge base: {0}")]
    KnowledgeBase(String),

    #[error("Reply scheduler unavailable: no tokio runtime is running on this thread")]
    SchedulerUnavailable,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = FaqbotError::Config("greeting must not be blank".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: greeting must not be blank"
        );

        let kb_err = FaqbotError::KnowledgeBase("entry 2 has no keywords".into());
        assert_eq!(
            kb_err.to_string(),
            "Invalid knowledge base: entry 2 has no keywords"
        );

        assert!(FaqbotError::SchedulerUnavailable
            .to_string()
            .contains("no tokio runtime"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = FaqbotError::Config("bad".into()).into();
        assert_eq!(
            err.downcast_ref::<FaqbotError>(),
            Some(&FaqbotError::Config("bad".into()))
        );
    }

    #[test]
    fn test_every_variant_has_a_source() {
        // Argument errors are reported by clap before any handler runs, so
        // each variant here maps to a failure the handlers can actually hit.
        let variants = [
            FaqbotError::Config(String::new()),
            FaqbotError::KnowledgeBase(String::new()),
            FaqbotError::SchedulerUnavailable,
        ];
        for variant in variants {
            match variant {
                FaqbotError::Config(_) => {}
                FaqbotError::KnowledgeBase(_) => {}
                FaqbotError::SchedulerUnavailable => {}
            }
        }
    }
}
