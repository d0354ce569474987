//! Predicator records: surface frequency plus stem/ending decompositions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One (stem, ending) decomposition of a conjugated surface form
///
/// Serialized as a two-element array `[stem, ending]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Lemma {
    /// Predicator stem
    pub stem: String,
    /// Ending (eomi)
    pub ending: String,
}

impl Lemma {
    /// Create a lemma
    pub fn new(stem: impl Into<String>, ending: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            ending: ending.into(),
        }
    }

    /// Prepend `prefix` to the stem, keeping the ending
    pub fn with_stem_prefix(&self, prefix: &str) -> Self {
        Self {
            stem: format!("{prefix}{}", self.stem),
            ending: self.ending.clone(),
        }
    }
}

impl From<(String, String)> for Lemma {
    fn from((stem, ending): (String, String)) -> Self {
        Self { stem, ending }
    }
}

impl From<Lemma> for (String, String) {
    fn from(lemma: Lemma) -> Self {
        (lemma.stem, lemma.ending)
    }
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.stem, self.ending)
    }
}

/// An adjective or verb surface form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicator {
    /// Frequency of the surface form
    pub count: u64,
    /// Possible decompositions; fixed when the record is created
    #[serde(default)]
    pub lemma: BTreeSet<Lemma>,
}

impl Predicator {
    /// Create a predicator
    pub fn new(count: u64, lemma: impl IntoIterator<Item = Lemma>) -> Self {
        Self {
            count,
            lemma: lemma.into_iter().collect(),
        }
    }

    /// Fold a later sighting of the same surface form into this record
    pub fn merge(&mut self, other: &Predicator) {
        self.count += other.count;
    }

    /// Distinct stems across all decompositions
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.lemma
            .iter()
            .map(|lemma| lemma.stem.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_serializes_as_pair() {
        let lemma = Lemma::new("먹", "었다");
        let json = serde_json::to_string(&lemma).unwrap();
        assert_eq!(json, r#"["먹","었다"]"#);
        let back: Lemma = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lemma);
    }

    #[test]
    fn test_stem_prefix() {
        let lemma = Lemma::new("보", "다");
        assert_eq!(lemma.with_stem_prefix("먹어"), Lemma::new("먹어보", "다"));
    }

    #[test]
    fn test_merge_keeps_first_lemma() {
        let mut first = Predicator::new(3, [Lemma::new("예쁘", "다")]);
        let later = Predicator::new(2, [Lemma::new("예", "쁘다")]);
        first.merge(&later);
        assert_eq!(first.count, 5);
        assert_eq!(first.lemma.len(), 1);
        assert!(first.lemma.contains(&Lemma::new("예쁘", "다")));
    }

    #[test]
    fn test_predicator_without_lemma_field() {
        let predicator: Predicator = serde_json::from_str(r#"{"count": 7}"#).unwrap();
        assert_eq!(predicator.count, 7);
        assert!(predicator.lemma.is_empty());
    }

    #[test]
    fn test_distinct_stems() {
        let predicator = Predicator::new(
            1,
            [
                Lemma::new("하", "였다"),
                Lemma::new("하", "았다"),
                Lemma::new("했", "다"),
            ],
        );
        assert_eq!(predicator.stems().collect::<Vec<_>>(), vec!["하", "했"]);
    }
}
