//! Token model shared by every tokenizer

use serde::Serialize;
use std::fmt;

/// One segment of a sentence
///
/// Offsets count characters, not bytes, and are absolute over the sentence
/// the token was cut from. `length == end - begin` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    word: String,
    begin: usize,
    end: usize,
    score: f64,
    length: usize,
    eojeol_id: usize,
}

impl Token {
    /// Create a token starting at `begin`; `end` and `length` follow from `word`
    pub fn new(word: impl Into<String>, begin: usize, score: f64, eojeol_id: usize) -> Self {
        let word = word.into();
        let length = word.chars().count();
        Self {
            word,
            begin,
            end: begin + length,
            score,
            length,
            eojeol_id,
        }
    }

    /// Create a token from a character slice of an eojeol
    pub(crate) fn from_chars(
        chars: &[char],
        begin: usize,
        score: f64,
        offset: usize,
        eojeol_id: usize,
    ) -> Self {
        Self {
            word: chars.iter().collect(),
            begin: offset + begin,
            end: offset + begin + chars.len(),
            score,
            length: chars.len(),
            eojeol_id,
        }
    }

    /// Surface form
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Start offset (inclusive)
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// End offset (exclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Dictionary score, or the tokenizer's unknown score
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Length in characters
    pub fn length(&self) -> usize {
        self.length
    }

    /// Index of the eojeol this token belongs to
    pub fn eojeol_id(&self) -> usize {
        self.eojeol_id
    }

    /// Whether this is a zero-length marker
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether two tokens share at least one character position
    pub fn overlaps(&self, other: &Token) -> bool {
        self.begin < other.end && other.begin < self.end
    }

    /// Consume the token, keeping only its surface form
    pub fn into_word(self) -> String {
        self.word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, score={}, position=({}, {}), eojeol_id={})",
            self.word, self.score, self.begin, self.end, self.eojeol_id
        )
    }
}
