//! Working state of one extraction run

use super::tag::{PosTag, WordClass};
use crate::dictionary::DictionaryDelta;
use serde::Serialize;
use std::collections::HashMap;

/// Surface string → frequency
pub type FrequencyTable = HashMap<String, u64>;

/// Morpheme-level tables filled while eojeols are claimed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordCounts {
    /// Nouns, including the noun part of noun + suffix eojeols
    pub nouns: FrequencyTable,
    /// Adjective surface forms
    pub adjectives: FrequencyTable,
    /// Verb surface forms
    pub verbs: FrequencyTable,
    /// Particles
    pub josas: FrequencyTable,
}

impl WordCounts {
    /// Table for `class`
    pub fn table(&self, class: WordClass) -> &FrequencyTable {
        match class {
            WordClass::Noun => &self.nouns,
            WordClass::Adjective => &self.adjectives,
            WordClass::Verb => &self.verbs,
            WordClass::Josa => &self.josas,
        }
    }

    fn table_mut(&mut self, class: WordClass) -> &mut FrequencyTable {
        match class {
            WordClass::Noun => &mut self.nouns,
            WordClass::Adjective => &mut self.adjectives,
            WordClass::Verb => &mut self.verbs,
            WordClass::Josa => &mut self.josas,
        }
    }

    /// Add `count` to `word` in the table for `class`
    pub fn add(&mut self, class: WordClass, word: &str, count: u64) {
        *self.table_mut(class).entry(word.to_string()).or_insert(0) += count;
    }

    /// Whether `word` has been counted as `class`
    pub fn contains(&self, class: WordClass, word: &str) -> bool {
        self.table(class).contains_key(word)
    }

    /// Whether `word` has been counted in any table
    pub fn contains_any(&self, word: &str) -> bool {
        WordClass::ALL
            .iter()
            .any(|&class| self.contains(class, word))
    }
}

/// A stage's decision about one residual eojeol
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// The eojeol being removed from the residual
    pub eojeol: String,
    /// Category the eojeol is filed under
    pub tag: PosTag,
    /// Morphemes that receive the eojeol's count
    pub parts: Vec<(WordClass, String)>,
}

impl Claim {
    /// Create a claim
    pub fn new(eojeol: &str, tag: PosTag, parts: Vec<(WordClass, String)>) -> Self {
        Self {
            eojeol: eojeol.to_string(),
            tag,
            parts,
        }
    }
}

/// Everything one stage produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageOutput {
    /// Eojeols claimed by the stage, at most one claim each
    pub claims: Vec<Claim>,
    /// Dictionary additions later stages must see
    pub delta: DictionaryDelta,
}

impl StageOutput {
    /// Claimed surface forms
    pub fn claimed(&self) -> impl Iterator<Item = &str> {
        self.claims.iter().map(|claim| claim.eojeol.as_str())
    }
}

/// Tables owned by a single extraction run
#[derive(Debug, Clone, Default)]
pub(crate) struct PipelineState {
    pub residual: FrequencyTable,
    pub counts: WordCounts,
    pub tags: HashMap<String, (PosTag, u64)>,
}

impl PipelineState {
    pub fn new(eojeols: &FrequencyTable) -> Self {
        Self {
            residual: eojeols.clone(),
            ..Default::default()
        }
    }

    /// Move claimed eojeols out of the residual; returns how many moved
    pub fn absorb(&mut self, claims: Vec<Claim>) -> usize {
        let mut absorbed = 0;
        for claim in claims {
            let Some(count) = self.residual.remove(&claim.eojeol) else {
                continue;
            };
            for (class, word) in &claim.parts {
                self.counts.add(*class, word, count);
            }
            self.tags.insert(claim.eojeol, (claim.tag, count));
            absorbed += 1;
        }
        absorbed
    }

    /// File whatever is left as irrecognized
    pub fn close(&mut self) {
        for (eojeol, count) in self.residual.drain() {
            self.tags.insert(eojeol, (PosTag::Irrecognized, count));
        }
    }

    pub fn tagged(&self, tag: PosTag) -> FrequencyTable {
        self.tags
            .iter()
            .filter(|(_, (t, _))| *t == tag)
            .map(|(eojeol, (_, count))| (eojeol.clone(), *count))
            .collect()
    }
}
