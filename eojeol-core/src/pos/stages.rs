//! The seven pattern-matching stages
//!
//! Every stage is a pure function over the residual eojeols, the word tables
//! filled so far and the dictionaries. It returns the eojeols it claims and
//! the dictionary additions it made; [`PosExtractor`](super::PosExtractor)
//! applies both before the next stage runs.

use super::state::{Claim, FrequencyTable, StageOutput, WordCounts};
use super::tag::{PosTag, WordClass};
use crate::dictionary::{lemmatize, Dictionaries, LemmaCandidates, Predicator};
use crate::tokenizer::{MaxScoreTokenizer, Token, Tokenizer, WordScores};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Eojeol equals a known noun, adjective or verb
    ExactMatch,
    /// Known noun followed by a particle, adjective or verb
    NounSuffix,
    /// Predicator followed by another predicator
    PredicatorCompound,
    /// Known stem followed by a known ending
    Lemmatization,
    /// One-syllable noun followed by an already counted suffix
    SyllableNoun,
    /// Standalone particles, endings and single characters
    IrregularResidue,
    /// Sequences of known nouns
    CompoundNoun,
}

impl Stage {
    /// All stages, in the order they run
    pub const ORDER: [Stage; 7] = [
        Stage::ExactMatch,
        Stage::NounSuffix,
        Stage::PredicatorCompound,
        Stage::Lemmatization,
        Stage::SyllableNoun,
        Stage::IrregularResidue,
        Stage::CompoundNoun,
    ];

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Stage::ExactMatch => "exact-match",
            Stage::NounSuffix => "noun-suffix",
            Stage::PredicatorCompound => "predicator-compound",
            Stage::Lemmatization => "lemmatization",
            Stage::SyllableNoun => "syllable-noun",
            Stage::IrregularResidue => "irregular-residue",
            Stage::CompoundNoun => "compound-noun",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Membership = fn(&Dictionaries, &str) -> bool;

/// Residual eojeols in a stable order
fn sorted(residual: &FrequencyTable) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = residual
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    entries.sort_unstable();
    entries
}

/// First split `word[..i] | word[i..]` with `2 <= i < len` accepted by both sides
fn separate<'a>(
    word: &'a str,
    left: impl Fn(&str) -> bool,
    right: impl Fn(&str) -> bool,
) -> Option<(&'a str, &'a str)> {
    word.char_indices()
        .skip(2)
        .map(|(byte, _)| word.split_at(byte))
        .find(|(l, r)| left(l) && right(r))
}

/// Stage 1: the eojeol is itself a known noun, adjective or verb
pub fn exact_match(residual: &FrequencyTable, dictionaries: &Dictionaries) -> StageOutput {
    let lookups: [(Membership, PosTag, WordClass); 3] = [
        (Dictionaries::is_noun, PosTag::Noun, WordClass::Noun),
        (Dictionaries::is_adjective, PosTag::Adjective, WordClass::Adjective),
        (Dictionaries::is_verb, PosTag::Verb, WordClass::Verb),
    ];

    let mut output = StageOutput::default();
    for (word, _) in sorted(residual) {
        if let Some((_, tag, class)) = lookups
            .iter()
            .find(|(known, _, _)| known(dictionaries, word))
        {
            output
                .claims
                .push(Claim::new(word, *tag, vec![(*class, word.to_string())]));
        }
    }
    output
}

/// Stage 2: known noun followed by a known particle, adjective or verb
///
/// All three suffix kinds are tried on every eojeol. Each match counts its
/// noun and suffix; the first kind that matched decides the tag. Nouns and
/// suffixes are looked up in `dictionaries`, not in the word tables.
pub fn noun_suffix(residual: &FrequencyTable, dictionaries: &Dictionaries) -> StageOutput {
    let suffixes: [(Membership, PosTag, WordClass); 3] = [
        (Dictionaries::is_josa, PosTag::Noun, WordClass::Josa),
        (Dictionaries::is_adjective, PosTag::Adjective, WordClass::Adjective),
        (Dictionaries::is_verb, PosTag::Verb, WordClass::Verb),
    ];

    let mut output = StageOutput::default();
    for (word, _) in sorted(residual) {
        let mut tag = None;
        let mut parts = Vec::new();
        for (known, suffix_tag, class) in &suffixes {
            let found = separate(
                word,
                |l| dictionaries.is_noun(l),
                |r| known(dictionaries, r),
            );
            if let Some((noun, suffix)) = found {
                parts.push((WordClass::Noun, noun.to_string()));
                parts.push((*class, suffix.to_string()));
                tag.get_or_insert(*suffix_tag);
            }
        }
        if let Some(tag) = tag {
            output.claims.push(Claim::new(word, tag, parts));
        }
    }
    output
}

/// Stage 3: a predicator followed by a known adjective or verb
///
/// The compound inherits the right part's decompositions with the left part
/// prepended to every stem. Both parts must be surfaces of the adjective or
/// verb dictionaries; the word tables are not consulted.
pub fn predicator_compound(residual: &FrequencyTable, dictionaries: &Dictionaries) -> StageOutput {
    let mut output = StageOutput::default();
    for (word, count) in sorted(residual) {
        let left_known = |l: &str| dictionaries.is_predicator(l);
        let (tag, class, prefix, base) =
            if let Some((l, r)) = separate(word, left_known, |r| dictionaries.is_adjective(r)) {
                (PosTag::Adjective, WordClass::Adjective, l, &dictionaries.adjectives[r])
            } else if let Some((l, r)) = separate(word, left_known, |r| dictionaries.is_verb(r)) {
                (PosTag::Verb, WordClass::Verb, l, &dictionaries.verbs[r])
            } else {
                continue;
            };

        let compound = Predicator::new(
            count,
            base.lemma.iter().map(|lemma| lemma.with_stem_prefix(prefix)),
        );
        let delta = &mut output.delta;
        let (stems, table) = match class {
            WordClass::Adjective => (&mut delta.adjective_stems, &mut delta.adjectives),
            _ => (&mut delta.verb_stems, &mut delta.verbs),
        };
        stems.extend(compound.stems().map(str::to_string));
        table.insert(word.to_string(), compound);

        output
            .claims
            .push(Claim::new(word, tag, vec![(class, word.to_string())]));
    }
    output
}

/// Stage 4: known stem followed by a known ending
///
/// Adjectives and verbs are tried independently; an eojeol that lemmatizes
/// both ways is registered in both dictionaries and counted as an adjective.
pub fn lemmatization<L>(
    residual: &FrequencyTable,
    dictionaries: &Dictionaries,
    generator: &L,
) -> StageOutput
where
    L: LemmaCandidates + ?Sized,
{
    let mut output = StageOutput::default();
    for (word, count) in sorted(residual) {
        let adjective = lemmatize(
            word,
            generator,
            &dictionaries.adjective_stems,
            &dictionaries.eomis,
        );
        let verb = lemmatize(word, generator, &dictionaries.verb_stems, &dictionaries.eomis);

        let tag = match (&adjective, &verb) {
            (Some(_), _) => (PosTag::Adjective, WordClass::Adjective),
            (None, Some(_)) => (PosTag::Verb, WordClass::Verb),
            (None, None) => continue,
        };
        if let Some(lemma) = adjective {
            output
                .delta
                .adjectives
                .insert(word.to_string(), Predicator::new(count, lemma));
        }
        if let Some(lemma) = verb {
            output
                .delta
                .verbs
                .insert(word.to_string(), Predicator::new(count, lemma));
        }
        output
            .claims
            .push(Claim::new(word, tag.0, vec![(tag.1, word.to_string())]));
    }
    output
}

/// Stage 5: one-syllable noun followed by an already counted suffix
///
/// The suffix is looked up in the adjective, verb and particle word tables,
/// in that order.
pub fn syllable_noun(residual: &FrequencyTable, counts: &WordCounts) -> StageOutput {
    let suffixes = [
        (WordClass::Adjective, PosTag::Adjective),
        (WordClass::Verb, PosTag::Verb),
        (WordClass::Josa, PosTag::Noun),
    ];

    let mut output = StageOutput::default();
    for (word, _) in sorted(residual) {
        let mut chars = word.char_indices();
        let (Some(_), Some((split, _))) = (chars.next(), chars.next()) else {
            continue;
        };
        let (noun, rest) = word.split_at(split);
        if let Some((class, tag)) = suffixes
            .iter()
            .find(|(class, _)| counts.contains(*class, rest))
        {
            output.claims.push(Claim::new(
                word,
                *tag,
                vec![
                    (WordClass::Noun, noun.to_string()),
                    (*class, rest.to_string()),
                ],
            ));
        }
    }
    output
}

/// Stage 6: drop standalone particles, endings and single characters
pub fn irregular_residue(residual: &FrequencyTable, dictionaries: &Dictionaries) -> StageOutput {
    let mut output = StageOutput::default();
    for (word, _) in sorted(residual) {
        let tag = if dictionaries.is_josa(word) {
            PosTag::Particle
        } else if dictionaries.is_eomi(word) || word.chars().count() == 1 {
            PosTag::Irrecognized
        } else {
            continue;
        };
        output.claims.push(Claim::new(word, tag, Vec::new()));
    }
    output
}

/// Stage 7: sequences of known nouns, optionally followed by a suffix
pub fn compound_noun(
    residual: &FrequencyTable,
    counts: &WordCounts,
    dictionaries: &Dictionaries,
) -> StageOutput {
    let nouns = WordScores::from_words(
        dictionaries
            .nouns
            .keys()
            .chain(counts.nouns.keys())
            .filter(|noun| noun.chars().count() > 1),
    );
    let tokenizer = MaxScoreTokenizer::new(nouns);

    let mut output = StageOutput::default();
    for (word, count) in sorted(residual) {
        let tokens = tokenizer.tokenize_eojeol(word, 0, 0);
        let Some(noun) = compound_of(&tokens, |suffix| counts.contains_any(suffix)) else {
            continue;
        };
        *output.delta.nouns.entry(noun.clone()).or_insert(0) += count;
        output
            .claims
            .push(Claim::new(word, PosTag::Noun, vec![(WordClass::Noun, noun)]));
    }
    output
}

/// Noun formed by a segmentation, if it reads as nouns plus an optional suffix
fn compound_of(tokens: &[Token], is_suffix: impl Fn(&str) -> bool) -> Option<String> {
    let (last, init) = tokens.split_last()?;
    if init.iter().any(|token| token.score() <= 0.0) {
        return None;
    }
    let concat = |tokens: &[Token]| tokens.iter().map(Token::word).collect::<String>();

    if tokens.len() >= 3 && is_suffix(last.word()) {
        Some(concat(init))
    } else if last.score() > 0.0 {
        Some(concat(tokens))
    } else {
        None
    }
}
