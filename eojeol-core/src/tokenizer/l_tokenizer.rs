//! Left/right splitting of eojeols

use super::{Token, Tokenizer, WordScores};
use crate::config::TokenizerConfig;
use crate::error::Result;

/// Splits each eojeol once into the most word-like left part and a remainder
///
/// The right part always scores 0 and is empty when the whole eojeol wins.
#[derive(Debug, Clone)]
pub struct LTokenizer {
    scores: WordScores,
    unknown_score: f64,
    tolerance: f64,
    remove_r: bool,
}

impl LTokenizer {
    /// Create a tokenizer with zero tolerance and unknown score 0
    pub fn new(scores: WordScores) -> Self {
        Self {
            scores,
            unknown_score: 0.0,
            tolerance: 0.0,
            remove_r: false,
        }
    }

    /// Create a tokenizer from a validated configuration
    pub fn with_config(scores: WordScores, config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scores,
            unknown_score: config.unknown_score,
            tolerance: config.tolerance,
            remove_r: config.remove_r,
        })
    }

    /// Find the left part length and its score
    ///
    /// Eojeols of up to two characters are never split. Longer ones try
    /// every left part of two characters or more.
    pub fn best_split(&self, chars: &[char]) -> (usize, f64) {
        let n = chars.len();
        if n <= 2 {
            let word: String = chars.iter().collect();
            return (n, self.scores.score_or(&word, self.unknown_score));
        }

        let candidates: Vec<(usize, f64)> = (2..=n)
            .map(|end| {
                let left: String = chars[..end].iter().collect();
                (end, self.scores.score_or(&left, self.unknown_score))
            })
            .collect();

        if self.tolerance > 0.0 {
            let max_score = candidates
                .iter()
                .map(|&(_, score)| score)
                .fold(f64::NEG_INFINITY, f64::max);
            candidates
                .into_iter()
                .filter(|&(_, score)| max_score - score <= self.tolerance)
                .max_by_key(|&(end, _)| end)
                .unwrap_or((n, self.unknown_score))
        } else {
            candidates
                .into_iter()
                .max_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
                .unwrap_or((n, self.unknown_score))
        }
    }
}

impl Tokenizer for LTokenizer {
    fn tokenize_eojeol(&self, eojeol: &str, offset: usize, eojeol_id: usize) -> Vec<Token> {
        let chars: Vec<char> = eojeol.chars().collect();
        let (split, score) = self.best_split(&chars);

        let left = Token::from_chars(&chars[..split], 0, score, offset, eojeol_id);
        if self.remove_r {
            return vec![left];
        }
        let right = Token::from_chars(&chars[split..], split, 0.0, offset, eojeol_id);
        vec![left, right]
    }
}
