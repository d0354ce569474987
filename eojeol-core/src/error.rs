//! Core error types
//!
//! Tokenizing and pattern matching never fail once a component is built.
//! Errors only surface while validating configuration or compiling user
//! supplied patterns.

use thiserror::Error;

/// Errors reported by the lemma-candidate seam
///
/// The pipeline treats every variant as "no candidates for this split".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LemmaError {
    /// The candidate stem was empty
    #[error("empty stem candidate")]
    EmptyStem,

    /// The candidate ending was empty
    #[error("empty ending candidate")]
    EmptyEnding,

    /// The generator rejected the split
    #[error("cannot lemmatize split ({stem}, {ending})")]
    Rejected {
        /// Left part handed to the generator
        stem: String,
        /// Right part handed to the generator
        ending: String,
    },
}

/// Core errors
#[derive(Debug, Error)]
pub enum EojeolError {
    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A custom tokenizer pattern failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Lemma generation failure surfaced to the caller
    #[error("lemma generation failed: {0}")]
    Lemma(#[from] LemmaError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, EojeolError>;
