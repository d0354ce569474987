//! Tokenizer configuration

use crate::error::{EojeolError, Result};
use serde::{Deserialize, Serialize};

/// Default upper bound on MaxScore candidate length
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Shared settings for the dictionary-driven tokenizers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Longest substring considered as a MaxScore candidate
    pub max_length: usize,
    /// Score given to substrings missing from the score table
    pub unknown_score: f64,
    /// L tokenizer: prefer the longest left part within this distance of the best score
    pub tolerance: f64,
    /// L tokenizer: drop the right part of every eojeol
    pub remove_r: bool,
    /// NounMatch: merge touching nouns into one compound
    pub concat_compound: bool,
    /// NounMatch: keep only a noun anchored at the start of the eojeol
    pub must_be_l: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            unknown_score: 0.0,
            tolerance: 0.0,
            remove_r: false,
            concat_compound: true,
            must_be_l: false,
        }
    }
}

impl TokenizerConfig {
    /// Create a builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(EojeolError::InvalidConfig(
                "max_length must be positive".to_string(),
            ));
        }
        if !self.unknown_score.is_finite() {
            return Err(EojeolError::InvalidConfig(format!(
                "unknown_score must be finite, got {}",
                self.unknown_score
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(EojeolError::InvalidConfig(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Set the maximum candidate length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    /// Set the unknown-word score
    pub fn unknown_score(mut self, score: f64) -> Self {
        self.config.unknown_score = score;
        self
    }

    /// Set the L tokenizer tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Return only left parts from the L tokenizer
    pub fn remove_r(mut self, remove_r: bool) -> Self {
        self.config.remove_r = remove_r;
        self
    }

    /// Merge touching nouns in the NounMatch tokenizer
    pub fn concat_compound(mut self, concat: bool) -> Self {
        self.config.concat_compound = concat;
        self
    }

    /// Keep only eojeol-initial nouns in the NounMatch tokenizer
    pub fn must_be_l(mut self, must_be_l: bool) -> Self {
        self.config.must_be_l = must_be_l;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TokenizerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
