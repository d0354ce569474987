//! Greedy maximum-score cover of an eojeol
//!
//! Candidates are every scored substring of two characters or more. They are
//! ranked by score, then length, then position. Selection walks the ranking
//! and drops every candidate that overlaps one already taken. Uncovered
//! stretches become filler tokens so the result always covers the eojeol
//! exactly once.

use super::{Token, Tokenizer, WordScores};
use crate::config::{TokenizerConfig, DEFAULT_MAX_LENGTH};
use crate::error::Result;
use std::cmp::Ordering;

/// Upper bound on greedy selection rounds, kept as a termination guard
pub const MAX_SELECTION_ITERATIONS: usize = 100;

/// Position-independent maximum-score tokenizer
#[derive(Debug, Clone)]
pub struct MaxScoreTokenizer {
    scores: WordScores,
    max_length: usize,
    unknown_score: f64,
}

impl MaxScoreTokenizer {
    /// Create a tokenizer with the default maximum length and unknown score 0
    pub fn new(scores: WordScores) -> Self {
        Self {
            scores,
            max_length: DEFAULT_MAX_LENGTH,
            unknown_score: 0.0,
        }
    }

    /// Create a tokenizer from a validated configuration
    pub fn with_config(scores: WordScores, config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scores,
            max_length: config.max_length,
            unknown_score: config.unknown_score,
        })
    }

    /// Score table in use
    pub fn scores(&self) -> &WordScores {
        &self.scores
    }

    /// Score assigned to uncovered stretches
    pub fn unknown_score(&self) -> f64 {
        self.unknown_score
    }

    fn candidates(&self, chars: &[char], offset: usize, eojeol_id: usize) -> Vec<Token> {
        let length = chars.len();
        let max_r = length.min(self.max_length);
        let mut scored = Vec::new();

        for begin in 0..length.saturating_sub(1) {
            for r in 2..=max_r {
                let end = begin + r;
                if end > length {
                    break;
                }
                let sub: String = chars[begin..end].iter().collect();
                if let Some(score) = self.scores.lookup(&sub) {
                    scored.push(Token::new(sub, offset + begin, score, eojeol_id));
                }
            }
        }

        scored.sort_by(rank);
        scored
    }

    fn select(mut scored: Vec<Token>) -> Vec<Token> {
        let mut selected = Vec::new();
        let mut iterations = 0;

        while !scored.is_empty() {
            if iterations > MAX_SELECTION_ITERATIONS {
                log::debug!(
                    "max-score selection stopped after {} rounds with {} candidates left",
                    iterations,
                    scored.len()
                );
                break;
            }

            let best = scored.remove(0);
            scored.retain(|other| !other.overlaps(&best));
            selected.push(best);
            iterations += 1;
        }

        selected.sort_by_key(Token::begin);
        selected
    }

    fn fill_gaps(
        &self,
        chars: &[char],
        selected: Vec<Token>,
        offset: usize,
        eojeol_id: usize,
    ) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(selected.len() * 2 + 1);
        let mut cursor = 0;
        let last = selected.len().saturating_sub(1);

        for (i, token) in selected.into_iter().enumerate() {
            let begin = token.begin() - offset;
            if begin > cursor {
                let gap = &chars[cursor..begin];
                // The prefix may itself be a scored word; inner gaps never are.
                let score = if i == 0 {
                    let word: String = gap.iter().collect();
                    self.scores.score_or(&word, self.unknown_score)
                } else {
                    self.unknown_score
                };
                tokens.push(Token::from_chars(gap, cursor, score, offset, eojeol_id));
            }
            cursor = token.end() - offset;
            tokens.push(token);

            if i == last && cursor < chars.len() {
                let tail = &chars[cursor..];
                let word: String = tail.iter().collect();
                let score = self.scores.score_or(&word, self.unknown_score);
                tokens.push(Token::from_chars(tail, cursor, score, offset, eojeol_id));
            }
        }

        tokens
    }
}

/// Higher score, then longer, then earlier
fn rank(a: &Token, b: &Token) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| b.length().cmp(&a.length()))
        .then_with(|| a.begin().cmp(&b.begin()))
}

impl Tokenizer for MaxScoreTokenizer {
    fn tokenize_eojeol(&self, eojeol: &str, offset: usize, eojeol_id: usize) -> Vec<Token> {
        let chars: Vec<char> = eojeol.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        if chars.len() <= 2 {
            let score = self.scores.score_or(eojeol, self.unknown_score);
            return vec![Token::new(eojeol, offset, score, eojeol_id)];
        }

        let scored = self.candidates(&chars, offset, eojeol_id);
        if scored.is_empty() {
            return vec![Token::new(eojeol, offset, self.unknown_score, eojeol_id)];
        }

        let selected = Self::select(scored);
        self.fill_gaps(&chars, selected, offset, eojeol_id)
    }
}
