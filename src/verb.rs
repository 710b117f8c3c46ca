//! Structs for verbs.
//!
//! This module provides the [Verb] struct.
//!
//! # Examples
//!
//! ```
//! use en_inflector::tense::Tense;
//! use en_inflector::term::Term; // Provides singular and plural
//! use en_inflector::verb::Verb;
//!
//! let verb = Verb::new("take");
//! assert_eq!(verb.past(), "took");
//! assert_eq!(verb.perfect(), "taken");
//! assert_eq!(verb.singular(), "takes");
//! assert_eq!(verb.continuous(), "taking");
//!
//! let verb = Verb::with_tense("took", Tense::Past);
//! assert_eq!(verb.present(), "take");
//! assert_eq!(verb.plural(), "take");
//! assert_eq!(verb.continuous(), "taking");
//! ```
use crate::{ll::verbs as ll, tense::Tense, term::Term};
use std::borrow::Cow;

/// A `Verb` is a single verb in a known tense.
#[derive(Debug)]
pub struct Verb<'a> {
    word: &'a str,
    tense: Tense,
}

impl<'a> Term<'a> for Verb<'a> {
    /// Creates a new verb in the present tense. Note that nothing in the
    /// code actually ensures that this is a verb, so you could write
    /// `Verb::new("food")` and it would work, for some value of
    /// "work". Actually parsing and understanding English is well beyond the
    /// remit of this crate.
    fn new(verb: &'a str) -> Self {
        Self::with_tense(verb, Tense::Present)
    }

    fn singular(&self) -> Cow<'a, str> {
        self.to_tense(Tense::Singular)
    }

    fn plural(&self) -> Cow<'a, str> {
        self.present()
    }
}

impl<'a> Verb<'a> {
    /// Creates a new verb which is already in the given tense.
    pub fn with_tense(verb: &'a str, tense: Tense) -> Self {
        Self { word: verb, tense }
    }

    pub fn tense(&self) -> Tense {
        self.tense
    }

    pub fn present(&self) -> Cow<'a, str> {
        self.to_tense(Tense::Present)
    }

    pub fn past(&self) -> Cow<'a, str> {
        self.to_tense(Tense::Past)
    }

    pub fn perfect(&self) -> Cow<'a, str> {
        self.to_tense(Tense::Perfect)
    }

    pub fn continuous(&self) -> Cow<'a, str> {
        self.to_tense(Tense::Continuous)
    }

    /// Returns the verb in the given tense. A verb that is not in the present
    /// tense is converted to the present tense first, since that is the only
    /// tense that can be converted to every other tense.
    pub fn to_tense(&self, tense: Tense) -> Cow<'a, str> {
        if self.tense == tense {
            return Cow::Borrowed(self.word);
        }
        if self.tense == Tense::Present {
            return ll::convert(self.word, Tense::Present, tense);
        }

        match ll::convert(self.word, self.tense, Tense::Present) {
            Cow::Borrowed(present) => ll::convert(present, Tense::Present, tense),
            Cow::Owned(present) => {
                Cow::Owned(ll::convert(&present, Tense::Present, tense).into_owned())
            }
        }
    }

    /// Returns every form of the verb, in [Tense::ALL] order.
    pub fn all_tenses(&self) -> [Cow<'a, str>; 5] {
        Tense::ALL.map(|t| self.to_tense(t))
    }
}
