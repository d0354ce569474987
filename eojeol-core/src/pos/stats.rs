//! Coverage summary of an extraction run

use super::state::WordCounts;
use super::tag::{PosTag, WordClass};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Unique entries and frequency mass of one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Share {
    /// Distinct surface forms
    pub unique: usize,
    /// Summed frequency
    pub frequency: u64,
    /// Frequency as a percentage of the input total
    pub percent: f64,
}

impl Share {
    fn new(unique: usize, frequency: u64, total: u64) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            100.0 * frequency as f64 / total as f64
        };
        Self {
            unique,
            frequency,
            percent,
        }
    }
}

/// Statistics of an extraction run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Total input eojeol frequency
    pub total_frequency: u64,
    /// Distinct input eojeols
    pub total_unique: usize,
    /// Eojeol classification; percentages sum to 100
    pub eojeols: BTreeMap<PosTag, Share>,
    /// Morpheme tables; percentages may exceed 100 in total
    pub words: BTreeMap<WordClass, Share>,
}

impl Statistics {
    /// Summarize a classification and the word tables built alongside it
    pub fn new(tags: &HashMap<String, (PosTag, u64)>, counts: &WordCounts) -> Self {
        let total_frequency: u64 = tags.values().map(|(_, count)| count).sum();

        let mut eojeols: BTreeMap<PosTag, (usize, u64)> =
            PosTag::ALL.iter().map(|&tag| (tag, (0, 0))).collect();
        for (tag, count) in tags.values() {
            let entry = eojeols.entry(*tag).or_default();
            entry.0 += 1;
            entry.1 += count;
        }

        let words = WordClass::ALL
            .iter()
            .map(|&class| {
                let table = counts.table(class);
                let share = Share::new(table.len(), table.values().sum(), total_frequency);
                (class, share)
            })
            .collect();

        Self {
            total_frequency,
            total_unique: tags.len(),
            eojeols: eojeols
                .into_iter()
                .map(|(tag, (unique, frequency))| {
                    (tag, Share::new(unique, frequency, total_frequency))
                })
                .collect(),
            words,
        }
    }

    /// Share of `tag` in the eojeol classification
    pub fn eojeol_share(&self, tag: PosTag) -> Share {
        self.eojeols.get(&tag).copied().unwrap_or_default()
    }

    /// Share of `class` in the word tables
    pub fn word_share(&self, class: WordClass) -> Share {
        self.words.get(&class).copied().unwrap_or_default()
    }

    /// Frequency of every classified eojeol
    pub fn classified_frequency(&self) -> u64 {
        self.eojeols.values().map(|share| share.frequency).sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} eojeols, total frequency {}",
            self.total_unique, self.total_frequency
        )?;
        writeln!(f, "eojeols:")?;
        for (tag, share) in &self.eojeols {
            writeln!(
                f,
                "  {:<13}{:>9} unique {:>7.3} %",
                tag.as_str(),
                share.unique,
                share.percent
            )?;
        }
        writeln!(f, "words:")?;
        for (class, share) in &self.words {
            writeln!(
                f,
                "  {:<13}{:>9} unique {:>7.3} %",
                class.as_str(),
                share.unique,
                share.percent
            )?;
        }
        Ok(())
    }
}
