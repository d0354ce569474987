//! Seam to the lemma-candidate generator
//!
//! Spelling-change rules live outside this crate. The pipeline only needs
//! candidate (stem, ending) pairs for a given split of a surface form.

use super::Lemma;
use crate::error::LemmaError;
use std::collections::{BTreeSet, HashSet};

/// Proposes (stem, ending) decompositions for a split surface form
pub trait LemmaCandidates {
    /// Candidates for the split `stem | ending`
    ///
    /// An error means the split is malformed; callers skip it.
    fn candidates(&self, stem: &str, ending: &str) -> Result<Vec<Lemma>, LemmaError>;
}

impl<F> LemmaCandidates for F
where
    F: Fn(&str, &str) -> Result<Vec<Lemma>, LemmaError>,
{
    fn candidates(&self, stem: &str, ending: &str) -> Result<Vec<Lemma>, LemmaError> {
        self(stem, ending)
    }
}

/// Rule-free generator: the split itself is the only candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceSplit;

impl LemmaCandidates for SurfaceSplit {
    fn candidates(&self, stem: &str, ending: &str) -> Result<Vec<Lemma>, LemmaError> {
        if stem.is_empty() {
            return Err(LemmaError::EmptyStem);
        }
        if ending.is_empty() {
            return Err(LemmaError::EmptyEnding);
        }
        Ok(vec![Lemma::new(stem, ending)])
    }
}

/// Decompose `word` against known stems and endings
///
/// Splits are tried from the longest left part down to the empty one. The
/// first split with at least one candidate whose stem and ending are both
/// known wins.
pub fn lemmatize<L>(
    word: &str,
    generator: &L,
    stems: &HashSet<String>,
    endings: &HashSet<String>,
) -> Option<BTreeSet<Lemma>>
where
    L: LemmaCandidates + ?Sized,
{
    let boundaries: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();

    for &split in boundaries.iter().rev() {
        let (left, right) = word.split_at(split);
        let candidates = match generator.candidates(left, right) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::trace!("skipping split {left}|{right} of {word}: {e}");
                continue;
            }
        };

        let known: BTreeSet<Lemma> = candidates
            .into_iter()
            .filter(|lemma| stems.contains(&lemma.stem) && endings.contains(&lemma.ending))
            .collect();
        if !known.is_empty() {
            return Some(known);
        }
    }

    None
}
