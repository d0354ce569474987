//! End-to-end tests for the POS extraction pipeline
//!
//! One small lexicon exercises every stage; each eojeol below is placed so
//! that exactly one stage can claim it.

use eojeol_core::dictionary::{Dictionaries, Lemma, Predicator};
use eojeol_core::error::LemmaError;
use eojeol_core::pos::{stages, FrequencyTable, PosExtractor, PosTag, Stage, WordClass, WordCounts};
use std::collections::HashMap;

fn table(entries: &[(&str, u64)]) -> FrequencyTable {
    entries.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

fn lexicon() -> Dictionaries {
    let mut d = Dictionaries::new();
    for (noun, count) in [("학교", 10), ("공부", 5), ("사과", 7), ("주스", 3)] {
        d.nouns.insert(noun.to_string(), count);
    }
    d.adjectives.insert(
        "예쁘다".to_string(),
        Predicator::new(2, [Lemma::new("예쁘", "다")]),
    );
    d.verbs.insert(
        "했다".to_string(),
        Predicator::new(4, [Lemma::new("하", "았다")]),
    );
    d.verbs.insert(
        "먹어".to_string(),
        Predicator::new(1, [Lemma::new("먹", "어")]),
    );
    d.verbs.insert(
        "보다".to_string(),
        Predicator::new(3, [Lemma::new("보", "다")]),
    );
    d.adjective_stems.insert("예쁘".to_string());
    d.verb_stems.extend(["하", "먹", "보"].map(String::from));
    d.eomis.extend(["다", "었다", "어요", "았다"].map(String::from));
    d.josas.extend(["가", "를", "에서", "는"].map(String::from));
    d
}

fn corpus() -> FrequencyTable {
    table(&[
        ("학교", 12),
        ("예쁘다", 2),
        ("학교에서", 4),
        ("공부했다", 3),
        ("먹어보다", 2),
        ("먹었다", 5),
        ("집에서", 2),
        ("를", 3),
        ("었다", 1),
        ("ㅋ", 1),
        ("사과주스", 2),
        ("학교공부에서", 1),
        ("ㅋㅋㅋ", 6),
    ])
}

#[test]
fn test_every_eojeol_is_classified_once() {
    let eojeols = corpus();
    let mut extractor = PosExtractor::new(lexicon());
    let extraction = extractor.extract(&eojeols);

    let expected: HashMap<&str, PosTag> = [
        ("학교", PosTag::Noun),
        ("예쁘다", PosTag::Adjective),
        ("학교에서", PosTag::Noun),
        ("공부했다", PosTag::Verb),
        ("먹어보다", PosTag::Verb),
        ("먹었다", PosTag::Verb),
        ("집에서", PosTag::Noun),
        ("를", PosTag::Particle),
        ("었다", PosTag::Irrecognized),
        ("ㅋ", PosTag::Irrecognized),
        ("사과주스", PosTag::Noun),
        ("학교공부에서", PosTag::Noun),
        ("ㅋㅋㅋ", PosTag::Irrecognized),
    ]
    .into_iter()
    .collect();

    assert_eq!(extraction.eojeols.len(), expected.len());
    for (eojeol, tag) in expected {
        assert_eq!(extraction.eojeols[eojeol], tag, "tag of {eojeol}");
    }
}

#[test]
fn test_frequency_mass_is_conserved() {
    let eojeols = corpus();
    let total: u64 = eojeols.values().sum();
    let mut extractor = PosExtractor::new(lexicon());
    let stats = extractor.extract(&eojeols).statistics;

    assert_eq!(stats.total_frequency, total);
    assert_eq!(stats.classified_frequency(), total);
    assert_eq!(stats.eojeol_share(PosTag::Noun).frequency, 21);
    assert_eq!(stats.eojeol_share(PosTag::Adjective).frequency, 2);
    assert_eq!(stats.eojeol_share(PosTag::Verb).frequency, 10);
    assert_eq!(stats.eojeol_share(PosTag::Particle).frequency, 3);
    assert_eq!(stats.eojeol_share(PosTag::Irrecognized).frequency, 8);

    let percent: f64 = stats.eojeols.values().map(|s| s.percent).sum();
    assert!((percent - 100.0).abs() < 1e-9);
}

#[test]
fn test_stage_claim_counts() {
    let mut extractor = PosExtractor::new(lexicon());
    let extraction = extractor.extract(&corpus());

    let claims: Vec<usize> = Stage::ORDER
        .iter()
        .map(|&stage| extraction.claims_of(stage))
        .collect();
    assert_eq!(claims, vec![2, 2, 1, 1, 1, 3, 2]);
}

#[test]
fn test_word_tables() {
    let mut extractor = PosExtractor::new(lexicon());
    let extraction = extractor.extract(&corpus());

    assert_eq!(extraction.nouns["학교"], 16);
    assert_eq!(extraction.nouns["공부"], 3);
    assert_eq!(extraction.nouns["집"], 2);
    assert_eq!(extraction.nouns["사과주스"], 2);
    assert_eq!(extraction.nouns["학교공부"], 1);
    assert_eq!(extraction.josas["에서"], 6);
    assert!(!extraction.josas.contains_key("를"));

    assert_eq!(extraction.adjectives["예쁘다"].count, 2);
    assert_eq!(extraction.verbs["했다"].count, 3);
    assert_eq!(extraction.verbs["먹었다"].count, 5);
    assert_eq!(extraction.irrecognized, table(&[("었다", 1), ("ㅋ", 1), ("ㅋㅋㅋ", 6)]));
}

#[test]
fn test_predicators_carry_decompositions() {
    let mut extractor = PosExtractor::new(lexicon());
    let extraction = extractor.extract(&corpus());

    let lemma = |surface: &str| -> Vec<Lemma> {
        extraction.verbs[surface].lemma.iter().cloned().collect()
    };
    assert_eq!(lemma("했다"), vec![Lemma::new("하", "았다")]);
    assert_eq!(lemma("먹어보다"), vec![Lemma::new("먹어보", "다")]);
    assert_eq!(lemma("먹었다"), vec![Lemma::new("먹", "었다")]);
    assert!(extraction.verb_stems.contains("먹어보"));
}

#[test]
fn test_dictionaries_keep_discoveries() {
    let mut extractor = PosExtractor::new(lexicon());
    extractor.extract(&corpus());
    let dictionaries = extractor.into_dictionaries();

    assert!(dictionaries.is_verb("먹어보다"));
    assert!(dictionaries.is_verb("먹었다"));
    assert!(dictionaries.is_noun("사과주스"));
    assert!(dictionaries.is_noun("학교공부"));
    assert_eq!(dictionaries.nouns["학교"], 10);
}

#[test]
fn test_exact_matches_never_reach_later_stages() {
    let d = lexicon();
    let residual = table(&[("학교", 1), ("학교에서", 1)]);
    let first = stages::exact_match(&residual, &d);
    assert_eq!(first.claimed().collect::<Vec<_>>(), vec!["학교"]);

    let mut extractor = PosExtractor::new(lexicon());
    let extraction = extractor.extract(&residual);
    assert_eq!(extraction.claims_of(Stage::ExactMatch), 1);
    assert_eq!(extraction.nouns["학교"], 2);
    assert_eq!(extraction.eojeols["학교"], PosTag::Noun);
}

#[test]
fn test_noun_suffix_subpasses_share_one_residual() {
    let mut d = lexicon();
    d.josas.insert("했다".to_string());
    let output = stages::noun_suffix(&table(&[("공부했다", 2)]), &d);

    assert_eq!(output.claims.len(), 1);
    let claim = &output.claims[0];
    assert_eq!(claim.tag, PosTag::Noun);
    assert!(claim.parts.contains(&(WordClass::Josa, "했다".to_string())));
    assert!(claim.parts.contains(&(WordClass::Verb, "했다".to_string())));
}

#[test]
fn test_compound_stage_sees_earlier_word_tables() {
    let d = Dictionaries::new();
    let mut counts = WordCounts::default();
    counts.add(WordClass::Noun, "전자", 1);
    counts.add(WordClass::Noun, "제품", 1);

    let output = stages::compound_noun(&table(&[("전자제품", 3)]), &counts, &d);
    assert_eq!(output.delta.nouns["전자제품"], 3);
}

#[test]
fn test_irregular_generator_plugs_in() {
    let mut d = Dictionaries::new();
    d.adjective_stems.insert("덥".to_string());
    d.eomis.insert("어요".to_string());

    // 더워 + 요 is 덥 + 어요
    let generator = |stem: &str, ending: &str| -> Result<Vec<Lemma>, LemmaError> {
        if stem == "더워" {
            Ok(vec![Lemma::new("덥", format!("어{ending}"))])
        } else {
            Err(LemmaError::Rejected {
                stem: stem.to_string(),
                ending: ending.to_string(),
            })
        }
    };

    let mut extractor = PosExtractor::with_generator(d, generator);
    let extraction = extractor.extract(&table(&[("더워요", 1)]));
    assert_eq!(extraction.eojeols["더워요"], PosTag::Adjective);
    assert!(extraction.adjectives["더워요"]
        .lemma
        .contains(&Lemma::new("덥", "어요")));
}

#[test]
fn test_statistics_serialize() {
    let mut extractor = PosExtractor::new(lexicon());
    let extraction = extractor.extract(&corpus());
    let json = serde_json::to_value(&extraction.statistics).unwrap();
    assert_eq!(json["total_frequency"], 44);
    assert_eq!(json["eojeols"]["Particle"]["unique"], 1);
}
