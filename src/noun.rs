//! Structs for nouns.
//!
//! This module provides the [Noun] struct.
//!
//! # Examples
//!
//! ```
//! use en_inflector::noun::Noun;
//! use en_inflector::term::Term; // Provides the interesting methods
//!
//! let noun = Noun::new("city");
//! let plural = noun.plural();
//! assert_eq!(plural, "cities");
//!
//! let noun = Noun::new("cities");
//! let singular = noun.singular();
//! assert_eq!(singular, "city");
//! ```
use crate::{ll::nouns as ll, term::Term};
use std::borrow::Cow;

/// A `Noun` is a single noun.
#[derive(Debug)]
pub struct Noun<'a>(&'a str);

impl<'a> Term<'a> for Noun<'a> {
    /// Creates a new noun from a string. Note that nothing in the code
    /// actually ensures that this is a noun, so you could write
    /// `Noun::new("eat")` and it would work, for some value of
    /// "work". Actually parsing and understanding English is well beyond the
    /// remit of this crate.
    fn new(noun: &'a str) -> Self {
        Self(noun)
    }

    fn singular(&self) -> Cow<'a, str> {
        ll::convert_to_singular(self.0)
    }

    fn plural(&self) -> Cow<'a, str> {
        ll::convert_to_plural(self.0)
    }
}

impl<'a> Noun<'a> {
    /// Returns true if the noun has the same singular and plural form, like
    /// "sheep" or "goldfish".
    pub fn is_uncountable(&self) -> bool {
        ll::is_uncountable(self.0)
    }
}
