//! Provides the [Tense] enum, which names the five forms a verb can be
//! converted between.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// The `Tense` enum has one variant for each verb form this crate knows
/// about. For example, "take" is present, "took" is past, "taken" is perfect,
/// "takes" is singular, and "taking" is continuous.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tense {
    /// The bare present form ("take").
    Present,
    /// The simple past form ("took").
    Past,
    /// The past participle used by the perfect tenses ("taken").
    Perfect,
    /// The third person singular present form ("takes").
    Singular,
    /// The present participle used by the continuous tenses ("taking").
    Continuous,
}

impl Tense {
    /// All tenses, in the order used by [crate::get_all_tenses].
    pub const ALL: [Tense; 5] = [
        Tense::Present,
        Tense::Past,
        Tense::Perfect,
        Tense::Singular,
        Tense::Continuous,
    ];

    pub(crate) fn idx(&self) -> usize {
        match self {
            Tense::Present => 0,
            Tense::Past => 1,
            Tense::Perfect => 2,
            Tense::Singular => 3,
            Tense::Continuous => 4,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::Perfect => "perfect",
            Tense::Singular => "singular",
            Tense::Continuous => "continuous",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("{0} is not a valid tense")]
pub struct Error(String);

impl FromStr for Tense {
    type Err = Error;

    /// Parses a tense name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tense::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error(s.to_string()))
    }
}
