//! Character-class splitting with an ordered regex pipeline

use super::{Token, Tokenizer};
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

/// Number, Hangul syllables, consonant jamo, vowel jamo, Latin letters
const DEFAULT_PATTERNS: [&str; 5] = [
    r"[-+]?\d*\.?\d+|[-+]?\d+",
    r"[가-힣]+",
    r"[ㄱ-ㅎ]+",
    r"[ㅏ-ㅣ]+",
    r"[a-zA-ZÀ-ÿ]+(?:[`']s)?",
];

static DEFAULT_PIPELINE: OnceLock<Vec<Regex>> = OnceLock::new();

fn default_pipeline() -> &'static [Regex] {
    DEFAULT_PIPELINE.get_or_init(|| {
        DEFAULT_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("Failed to compile default pattern"))
            .collect()
    })
}

/// Splits eojeols on changes of character class
///
/// Each pattern carves its matches out of the pieces earlier patterns left
/// untouched. Whatever no pattern claims stays together as a residual run.
/// Every token scores 1.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pipelines: Vec<Regex>,
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexTokenizer {
    /// Create a tokenizer with the default character-class pipeline
    pub fn new() -> Self {
        Self {
            pipelines: default_pipeline().to_vec(),
        }
    }

    /// Create a tokenizer from custom patterns, applied in order
    pub fn with_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pipelines = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { pipelines })
    }

    /// Patterns in application order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.pipelines.iter().map(Regex::as_str)
    }

    fn split_pieces<'a>(&self, eojeol: &'a str) -> Vec<&'a str> {
        // (piece, carved by a pattern)
        let mut pieces: Vec<(&str, bool)> = vec![(eojeol, false)];

        for pattern in &self.pipelines {
            let mut next = Vec::with_capacity(pieces.len());
            for (piece, carved) in pieces {
                if carved {
                    next.push((piece, true));
                    continue;
                }
                let mut last = 0;
                for found in pattern.find_iter(piece) {
                    if found.start() == found.end() {
                        continue;
                    }
                    if found.start() > last {
                        next.push((&piece[last..found.start()], false));
                    }
                    next.push((found.as_str(), true));
                    last = found.end();
                }
                if last < piece.len() {
                    next.push((&piece[last..], false));
                }
            }
            pieces = next;
        }

        pieces.into_iter().map(|(piece, _)| piece).collect()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize_eojeol(&self, eojeol: &str, offset: usize, eojeol_id: usize) -> Vec<Token> {
        let mut begin = offset;
        self.split_pieces(eojeol)
            .into_iter()
            .map(|piece| {
                let token = Token::new(piece, begin, 1.0, eojeol_id);
                begin = token.end();
                token
            })
            .collect()
    }
}
