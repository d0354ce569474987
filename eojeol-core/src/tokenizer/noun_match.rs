//! Noun matching on top of the max-score cover

use super::{MaxScoreTokenizer, Token, Tokenizer, WordScores};
use crate::config::TokenizerConfig;
use crate::error::Result;

/// Recognizes nouns inside eojeols and optionally joins touching nouns
#[derive(Debug, Clone)]
pub struct NounMatchTokenizer {
    inner: MaxScoreTokenizer,
    concat_compound: bool,
    must_be_l: bool,
}

impl NounMatchTokenizer {
    /// Create a tokenizer from scored nouns
    pub fn new(noun_scores: WordScores) -> Self {
        let defaults = TokenizerConfig::default();
        Self {
            inner: MaxScoreTokenizer::new(noun_scores),
            concat_compound: defaults.concat_compound,
            must_be_l: defaults.must_be_l,
        }
    }

    /// Create a tokenizer from a plain noun list; every noun scores 1.0
    pub fn from_nouns<I, S>(nouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(WordScores::from_words(nouns))
    }

    /// Create a tokenizer from a validated configuration
    pub fn with_config(noun_scores: WordScores, config: &TokenizerConfig) -> Result<Self> {
        Ok(Self {
            inner: MaxScoreTokenizer::with_config(noun_scores, config)?,
            concat_compound: config.concat_compound,
            must_be_l: config.must_be_l,
        })
    }

    /// Toggle merging of touching nouns
    pub fn concat_compound(mut self, concat: bool) -> Self {
        self.concat_compound = concat;
        self
    }

    /// Toggle keeping only the eojeol-initial noun
    pub fn must_be_l(mut self, must_be_l: bool) -> Self {
        self.must_be_l = must_be_l;
        self
    }
}

/// Join runs of touching tokens; a run scores the max of its members
fn concatenate(nouns: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(nouns.len());
    for noun in nouns {
        match merged.last_mut() {
            Some(run) if run.end() == noun.begin() => {
                let word = format!("{}{}", run.word(), noun.word());
                let score = run.score().max(noun.score());
                *run = Token::new(word, run.begin(), score, run.eojeol_id());
            }
            _ => merged.push(noun),
        }
    }
    merged
}

impl Tokenizer for NounMatchTokenizer {
    fn tokenize_eojeol(&self, eojeol: &str, offset: usize, eojeol_id: usize) -> Vec<Token> {
        let mut nouns: Vec<Token> = self
            .inner
            .tokenize_eojeol(eojeol, offset, eojeol_id)
            .into_iter()
            .filter(|token| token.score() > 0.0)
            .collect();

        if self.concat_compound {
            nouns = concatenate(nouns);
        }

        if self.must_be_l {
            nouns.truncate(1);
            if nouns.first().is_some_and(|noun| noun.begin() != offset) {
                nouns.clear();
            }
        }

        nouns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenate_touching_runs() {
        let nouns = vec![
            Token::new("오이", 11, 0.7, 1),
            Token::new("오이", 13, 0.5, 1),
            Token::new("아이", 16, 0.9, 1),
        ];
        let merged = concatenate(nouns);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].word(), "오이오이");
        assert_eq!(merged[0].score(), 0.7);
        assert_eq!((merged[0].begin(), merged[0].end()), (11, 15));
        assert_eq!(merged[1].score(), 0.9);
    }

    #[test]
    fn test_fillers_are_dropped() {
        let tokenizer = NounMatchTokenizer::from_nouns(["사과"]).concat_compound(false);
        assert_eq!(tokenizer.words("사과주스를"), vec!["사과"]);
    }

    #[test]
    fn test_must_be_l_rejects_unanchored() {
        let tokenizer = NounMatchTokenizer::from_nouns(["주스"]).must_be_l(true);
        assert!(tokenizer.words("사과주스").is_empty());
        assert_eq!(tokenizer.words("주스사과"), vec!["주스"]);
    }

    #[test]
    fn test_no_nouns_found() {
        let tokenizer = NounMatchTokenizer::from_nouns(["사과"]);
        assert!(tokenizer.tokenize("좋아하는").is_empty());
    }
}
