//! Dictionaries produced by the external learners
//!
//! The pipeline reads these and grows them: compound predicators, new stems
//! and compound nouns are written back so later stages can use them.

mod lemma;
mod predicator;

pub use lemma::{lemmatize, LemmaCandidates, SurfaceSplit};
pub use predicator::{Lemma, Predicator};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Learned lexicon shared by all pipeline stages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionaries {
    /// Noun → frequency
    pub nouns: HashMap<String, u64>,
    /// Adjective surface form → predicator
    pub adjectives: HashMap<String, Predicator>,
    /// Verb surface form → predicator
    pub verbs: HashMap<String, Predicator>,
    /// Known adjective stems
    pub adjective_stems: HashSet<String>,
    /// Known verb stems
    pub verb_stems: HashSet<String>,
    /// Known endings (eomi)
    pub eomis: HashSet<String>,
    /// Known particles (josa)
    pub josas: HashSet<String>,
}

impl Dictionaries {
    /// Create empty dictionaries
    pub fn new() -> Self {
        Self::default()
    }

    /// Known noun
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Known adjective surface form
    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains_key(word)
    }

    /// Known verb surface form
    pub fn is_verb(&self, word: &str) -> bool {
        self.verbs.contains_key(word)
    }

    /// Known adjective or verb surface form
    pub fn is_predicator(&self, word: &str) -> bool {
        self.is_adjective(word) || self.is_verb(word)
    }

    /// Known particle
    pub fn is_josa(&self, word: &str) -> bool {
        self.josas.contains(word)
    }

    /// Known ending
    pub fn is_eomi(&self, word: &str) -> bool {
        self.eomis.contains(word)
    }

    /// Write a stage's discoveries back
    pub fn apply(&mut self, delta: DictionaryDelta) {
        for (noun, count) in delta.nouns {
            *self.nouns.entry(noun).or_insert(0) += count;
        }
        for (surface, predicator) in delta.adjectives {
            merge_predicator(&mut self.adjectives, surface, predicator);
        }
        for (surface, predicator) in delta.verbs {
            merge_predicator(&mut self.verbs, surface, predicator);
        }
        self.adjective_stems.extend(delta.adjective_stems);
        self.verb_stems.extend(delta.verb_stems);
    }
}

fn merge_predicator(table: &mut HashMap<String, Predicator>, surface: String, new: Predicator) {
    table
        .entry(surface)
        .and_modify(|existing| existing.merge(&new))
        .or_insert(new);
}

/// Additions a stage makes to the dictionaries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictionaryDelta {
    /// New or reinforced nouns
    pub nouns: BTreeMap<String, u64>,
    /// New adjective surface forms
    pub adjectives: BTreeMap<String, Predicator>,
    /// New verb surface forms
    pub verbs: BTreeMap<String, Predicator>,
    /// Newly confirmed adjective stems
    pub adjective_stems: BTreeSet<String>,
    /// Newly confirmed verb stems
    pub verb_stems: BTreeSet<String>,
}

impl DictionaryDelta {
    /// Whether the delta adds nothing
    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
            && self.adjectives.is_empty()
            && self.verbs.is_empty()
            && self.adjective_stems.is_empty()
            && self.verb_stems.is_empty()
    }
}
