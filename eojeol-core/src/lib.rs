//! Dictionary-assisted segmentation and part-of-speech pattern matching for Korean
//!
//! Korean text is written as whitespace-delimited eojeols, each a noun or
//! predicator stem with any particles and endings attached. This crate splits
//! eojeols into scored substrings and sorts eojeol frequency tables into
//! nouns, adjectives, verbs and particles using learned dictionaries.
//!
//! # Architecture
//!
//! - **tokenizer**: the [`Token`] model and four strategies behind the
//!   [`Tokenizer`] trait (regex, L, max-score, noun-match)
//! - **dictionary**: learned lexicon, predicator records and the
//!   lemma-candidate seam
//! - **pos**: the staged extraction pipeline and its statistics
//!
//! # Example
//!
//! ```rust
//! use eojeol_core::{MaxScoreTokenizer, Tokenizer, WordScores};
//!
//! let scores: WordScores = [("파스", 0.65), ("파스타", 0.7), ("좋아", 0.3)]
//!     .into_iter()
//!     .collect();
//! let tokenizer = MaxScoreTokenizer::new(scores);
//!
//! assert_eq!(tokenizer.words("파스타가좋아요"), vec!["파스타", "가", "좋아", "요"]);
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod pos;
pub mod tokenizer;

pub use config::{TokenizerConfig, TokenizerConfigBuilder, DEFAULT_MAX_LENGTH};
pub use dictionary::{Dictionaries, Lemma, LemmaCandidates, Predicator, SurfaceSplit};
pub use error::{EojeolError, LemmaError, Result};
pub use pos::{Extraction, PosExtractor, PosTag, Stage, Statistics, WordClass};
pub use tokenizer::{
    LTokenizer, MaxScoreTokenizer, NounMatchTokenizer, RegexTokenizer, Token, Tokenizer,
    WordScores, MAX_SELECTION_ITERATIONS,
};
