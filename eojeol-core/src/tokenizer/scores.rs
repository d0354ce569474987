//! Read-only word score tables

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Word → score table consumed by the dictionary-driven tokenizers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordScores {
    scores: HashMap<String, f64>,
}

impl WordScores {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table where every word scores 1.0
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().map(|word| (word, 1.0)).collect()
    }

    /// Score of `word`, if it is in the table
    pub fn lookup(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Score of `word`, falling back to `unknown_score`
    pub fn score_or(&self, word: &str, unknown_score: f64) -> f64 {
        self.lookup(word).unwrap_or(unknown_score)
    }

    /// Number of scored words
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table has no words
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for WordScores {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|(word, score)| (word.into(), score))
                .collect(),
        }
    }
}

impl From<HashMap<String, f64>> for WordScores {
    fn from(scores: HashMap<String, f64>) -> Self {
        Self { scores }
    }
}
