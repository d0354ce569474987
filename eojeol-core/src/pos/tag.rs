//! Categories assigned by the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a whole eojeol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosTag {
    /// Noun, alone or followed by a particle
    Noun,
    /// Adjective, possibly preceded by a noun
    Adjective,
    /// Verb, possibly preceded by a noun
    Verb,
    /// A standalone particle
    Particle,
    /// Nothing matched
    Irrecognized,
}

impl PosTag {
    /// Every tag, in report order
    pub const ALL: [PosTag; 5] = [
        PosTag::Noun,
        PosTag::Adjective,
        PosTag::Verb,
        PosTag::Particle,
        PosTag::Irrecognized,
    ];

    /// Tag name as printed in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "Noun",
            PosTag::Adjective => "Adjective",
            PosTag::Verb => "Verb",
            PosTag::Particle => "Particle",
            PosTag::Irrecognized => "Irrecognized",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word table a morpheme is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordClass {
    /// Nouns
    Noun,
    /// Adjective surface forms
    Adjective,
    /// Verb surface forms
    Verb,
    /// Particles
    Josa,
}

impl WordClass {
    /// Every class, in report order
    pub const ALL: [WordClass; 4] = [
        WordClass::Noun,
        WordClass::Adjective,
        WordClass::Verb,
        WordClass::Josa,
    ];

    /// Class name as printed in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            WordClass::Noun => "Noun",
            WordClass::Adjective => "Adjective",
            WordClass::Verb => "Verb",
            WordClass::Josa => "Josa",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
