//! Dictionary-driven part-of-speech pattern matching over eojeol counts
//!
//! [`PosExtractor`] runs the stages of [`stages`] in a fixed order over a
//! shrinking residual of eojeols. Each claimed eojeol is filed under exactly
//! one [`PosTag`] with its full count, so the classification always accounts
//! for the whole input. Alongside it, [`WordCounts`] collects the nouns,
//! particles and predicators the eojeols were made of.

pub mod stages;
mod state;
mod stats;
mod tag;

pub use stages::Stage;
pub use state::{Claim, FrequencyTable, StageOutput, WordCounts};
pub use stats::{Share, Statistics};
pub use tag::{PosTag, WordClass};

use crate::dictionary::{lemmatize, Dictionaries, LemmaCandidates, Predicator, SurfaceSplit};
use serde::Serialize;
use state::PipelineState;
use std::collections::{HashMap, HashSet};

/// Result of one extraction run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    /// Noun word table
    pub nouns: FrequencyTable,
    /// Adjective surface forms with their decompositions
    pub adjectives: HashMap<String, Predicator>,
    /// Verb surface forms with their decompositions
    pub verbs: HashMap<String, Predicator>,
    /// Particle word table
    pub josas: FrequencyTable,
    /// Eojeols filed as irrecognized
    pub irrecognized: FrequencyTable,
    /// Adjective stems known at the end of the run
    pub adjective_stems: HashSet<String>,
    /// Verb stems known at the end of the run
    pub verb_stems: HashSet<String>,
    /// Endings known at the end of the run
    pub eomis: HashSet<String>,
    /// Category of every input eojeol
    pub eojeols: HashMap<String, PosTag>,
    /// Eojeols claimed by each stage
    pub stage_claims: Vec<(Stage, usize)>,
    /// Coverage summary
    pub statistics: Statistics,
}

impl Extraction {
    /// Eojeols filed under `tag`
    pub fn tagged(&self, tag: PosTag) -> impl Iterator<Item = &str> {
        self.eojeols
            .iter()
            .filter(move |(_, t)| **t == tag)
            .map(|(eojeol, _)| eojeol.as_str())
    }

    /// Claims made by `stage`
    pub fn claims_of(&self, stage: Stage) -> usize {
        self.stage_claims
            .iter()
            .find(|(s, _)| *s == stage)
            .map_or(0, |(_, n)| *n)
    }
}

/// Runs the pattern-matching stages against a set of dictionaries
///
/// The dictionaries grow during a run: compound predicators, new stems and
/// compound nouns found by one stage are visible to every later stage and to
/// later runs.
///
/// # Example
///
/// ```
/// use eojeol_core::dictionary::Dictionaries;
/// use eojeol_core::pos::{PosExtractor, PosTag};
/// use std::collections::HashMap;
///
/// let mut dictionaries = Dictionaries::new();
/// dictionaries.nouns.insert("사과".to_string(), 1);
/// dictionaries.josas.insert("가".to_string());
///
/// let eojeols: HashMap<String, u64> =
///     [("사과가".to_string(), 3), ("ㅋㅋ".to_string(), 1)].into_iter().collect();
///
/// let mut extractor = PosExtractor::new(dictionaries);
/// let extraction = extractor.extract(&eojeols);
///
/// assert_eq!(extraction.eojeols["사과가"], PosTag::Noun);
/// assert_eq!(extraction.nouns["사과"], 3);
/// assert_eq!(extraction.irrecognized["ㅋㅋ"], 1);
/// ```
#[derive(Debug, Clone)]
pub struct PosExtractor<L = SurfaceSplit> {
    dictionaries: Dictionaries,
    generator: L,
}

impl PosExtractor<SurfaceSplit> {
    /// Create an extractor that lemmatizes by plain surface splits
    pub fn new(dictionaries: Dictionaries) -> Self {
        Self::with_generator(dictionaries, SurfaceSplit)
    }
}

impl<L: LemmaCandidates> PosExtractor<L> {
    /// Create an extractor with a custom lemma-candidate generator
    pub fn with_generator(dictionaries: Dictionaries, generator: L) -> Self {
        Self {
            dictionaries,
            generator,
        }
    }

    /// Current dictionaries, including additions from earlier runs
    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Release the dictionaries
    pub fn into_dictionaries(self) -> Dictionaries {
        self.dictionaries
    }

    /// Evaluate one stage without applying its result
    pub fn run_stage(
        &self,
        stage: Stage,
        residual: &FrequencyTable,
        counts: &WordCounts,
    ) -> StageOutput {
        let dictionaries = &self.dictionaries;
        match stage {
            Stage::ExactMatch => stages::exact_match(residual, dictionaries),
            Stage::NounSuffix => stages::noun_suffix(residual, dictionaries),
            Stage::PredicatorCompound => stages::predicator_compound(residual, dictionaries),
            Stage::Lemmatization => stages::lemmatization(residual, dictionaries, &self.generator),
            Stage::SyllableNoun => stages::syllable_noun(residual, counts),
            Stage::IrregularResidue => stages::irregular_residue(residual, dictionaries),
            Stage::CompoundNoun => stages::compound_noun(residual, counts, dictionaries),
        }
    }

    /// Classify every eojeol of `eojeols`
    pub fn extract(&mut self, eojeols: &FrequencyTable) -> Extraction {
        let mut state = PipelineState::new(eojeols);
        let mut stage_claims = Vec::with_capacity(Stage::ORDER.len());

        for stage in Stage::ORDER {
            let before = state.residual.len();
            let output = self.run_stage(stage, &state.residual, &state.counts);
            let claimed = state.absorb(output.claims);
            self.dictionaries.apply(output.delta);

            log::debug!(
                "[{stage}] claimed {claimed} of {before} eojeols, {} left",
                state.residual.len()
            );
            stage_claims.push((stage, claimed));
        }

        state.close();
        let statistics = Statistics::new(&state.tags, &state.counts);
        log::info!("POS extraction finished\n{statistics}");

        let adjectives = self.finalize(&state.counts.adjectives, WordClass::Adjective);
        let verbs = self.finalize(&state.counts.verbs, WordClass::Verb);
        let irrecognized = state.tagged(PosTag::Irrecognized);
        let eojeols = state
            .tags
            .iter()
            .map(|(eojeol, (tag, _))| (eojeol.clone(), *tag))
            .collect();

        Extraction {
            nouns: state.counts.nouns,
            adjectives,
            verbs,
            josas: state.counts.josas,
            irrecognized,
            adjective_stems: self.dictionaries.adjective_stems.clone(),
            verb_stems: self.dictionaries.verb_stems.clone(),
            eomis: self.dictionaries.eomis.clone(),
            eojeols,
            stage_claims,
            statistics,
        }
    }

    /// Attach decompositions to a predicator word table
    fn finalize(&self, table: &FrequencyTable, class: WordClass) -> HashMap<String, Predicator> {
        let (known, stems) = match class {
            WordClass::Adjective => (
                &self.dictionaries.adjectives,
                &self.dictionaries.adjective_stems,
            ),
            _ => (&self.dictionaries.verbs, &self.dictionaries.verb_stems),
        };

        table
            .iter()
            .map(|(surface, &count)| {
                let lemma = match known.get(surface) {
                    Some(predicator) => predicator.lemma.clone(),
                    None => lemmatize(surface, &self.generator, stems, &self.dictionaries.eomis)
                        .unwrap_or_default(),
                };
                (surface.clone(), Predicator { count, lemma })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Lemma;
    use crate::error::LemmaError;

    fn table(entries: &[(&str, u64)]) -> FrequencyTable {
        entries.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    fn dictionaries() -> Dictionaries {
        let mut d = Dictionaries::new();
        d.nouns.insert("사과".to_string(), 5);
        d.nouns.insert("주스".to_string(), 2);
        d.verbs.insert(
            "먹었다".to_string(),
            Predicator::new(3, [Lemma::new("먹", "었다")]),
        );
        d.verb_stems.insert("먹".to_string());
        d.eomis.extend(["었다", "어요"].map(String::from));
        d.josas.extend(["가", "를"].map(String::from));
        d
    }

    #[test]
    fn test_extract_conserves_frequency() {
        let eojeols = table(&[
            ("사과", 4),
            ("사과를", 2),
            ("먹었다", 3),
            ("먹어요", 1),
            ("를", 2),
            ("사과주스", 1),
            ("ㅋㅋ", 5),
        ]);
        let mut extractor = PosExtractor::new(dictionaries());
        let extraction = extractor.extract(&eojeols);

        let total: u64 = eojeols.values().sum();
        assert_eq!(extraction.statistics.classified_frequency(), total);
        assert_eq!(extraction.eojeols.len(), eojeols.len());
        assert_eq!(extraction.eojeols["사과주스"], PosTag::Noun);
        assert_eq!(extraction.eojeols["먹어요"], PosTag::Verb);
        assert_eq!(extraction.eojeols["를"], PosTag::Particle);
        assert_eq!(extraction.irrecognized, table(&[("ㅋㅋ", 5)]));

        let mut nouns: Vec<&str> = extraction.tagged(PosTag::Noun).collect();
        nouns.sort_unstable();
        assert_eq!(nouns, vec!["사과", "사과를", "사과주스"]);
    }

    #[test]
    fn test_extract_fills_word_tables() {
        let eojeols = table(&[("사과", 4), ("사과를", 2), ("먹었다", 3), ("먹어요", 1)]);
        let mut extractor = PosExtractor::new(dictionaries());
        let extraction = extractor.extract(&eojeols);

        assert_eq!(extraction.nouns["사과"], 6);
        assert_eq!(extraction.josas["를"], 2);
        assert_eq!(extraction.verbs["먹었다"].count, 3);
        assert!(extraction.verbs["먹어요"]
            .lemma
            .contains(&Lemma::new("먹", "어요")));
        assert_eq!(extraction.claims_of(Stage::ExactMatch), 2);
        assert_eq!(extraction.claims_of(Stage::NounSuffix), 1);
        assert_eq!(extraction.claims_of(Stage::Lemmatization), 1);
    }

    #[test]
    fn test_dictionaries_grow_across_runs() {
        let mut extractor = PosExtractor::new(dictionaries());
        extractor.extract(&table(&[("사과주스", 1)]));
        assert!(extractor.dictionaries().is_noun("사과주스"));

        let extraction = extractor.extract(&table(&[("사과주스", 2)]));
        assert_eq!(extraction.claims_of(Stage::ExactMatch), 1);
    }

    #[test]
    fn test_custom_generator() {
        let generator = |stem: &str, ending: &str| -> Result<Vec<Lemma>, LemmaError> {
            Ok(vec![Lemma::new(stem, ending)])
        };
        let mut extractor = PosExtractor::with_generator(dictionaries(), generator);
        let extraction = extractor.extract(&table(&[("먹어요", 1)]));
        assert_eq!(extraction.eojeols["먹어요"], PosTag::Verb);
    }

    #[test]
    fn test_empty_input() {
        let mut extractor = PosExtractor::new(dictionaries());
        let extraction = extractor.extract(&FrequencyTable::new());
        assert!(extraction.eojeols.is_empty());
        assert_eq!(extraction.statistics.total_frequency, 0);
        assert_eq!(extraction.stage_claims.len(), 7);
    }
}
