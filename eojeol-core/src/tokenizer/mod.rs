//! Substring tokenizers
//!
//! Every tokenizer works one eojeol at a time. The trait's provided methods
//! walk a sentence, assign eojeol indices and keep absolute character
//! offsets, assuming a single separator between eojeols.

mod l_tokenizer;
mod max_score;
mod noun_match;
mod regex_tokenizer;
mod scores;
mod token;

pub use l_tokenizer::LTokenizer;
pub use max_score::{MaxScoreTokenizer, MAX_SELECTION_ITERATIONS};
pub use noun_match::NounMatchTokenizer;
pub use regex_tokenizer::RegexTokenizer;
pub use scores::WordScores;
pub use token::Token;

/// A segmentation strategy over whitespace-delimited eojeols
pub trait Tokenizer: Send + Sync {
    /// Tokenize one eojeol whose first character sits at `offset`
    fn tokenize_eojeol(&self, eojeol: &str, offset: usize, eojeol_id: usize) -> Vec<Token>;

    /// Tokenize a sentence, keeping tokens grouped by eojeol
    fn tokenize_nested(&self, sentence: &str) -> Vec<Vec<Token>> {
        let mut offset = 0;
        let mut nested = Vec::new();
        for (eojeol_id, eojeol) in sentence.split_whitespace().enumerate() {
            nested.push(self.tokenize_eojeol(eojeol, offset, eojeol_id));
            offset += eojeol.chars().count() + 1;
        }
        nested
    }

    /// Tokenize a sentence into a flat token sequence
    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        self.tokenize_nested(sentence).into_iter().flatten().collect()
    }

    /// Tokenize a sentence and keep only non-empty surface forms
    fn words(&self, sentence: &str) -> Vec<String> {
        self.tokenize(sentence)
            .into_iter()
            .filter(|token| !token.is_empty())
            .map(Token::into_word)
            .collect()
    }
}
