// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Pluralize and singularize English nouns, and convert English verbs
//! between tenses.
//!
//! All of the rules are table driven. Nouns are checked against a list of
//! uncountable words, then words with irregular plurals, then an ordered list
//! of suffix rules where the first match wins. Verbs are checked against the
//! auxiliary verbs, then a table of irregular verbs, then a small set of
//! rules for regular verbs. The tables live in [ll] and can be rearranged or
//! extended to change the results.
//!
//! Every function here takes any string and always returns a string. A word
//! that no rule applies to is returned as is, without allocating.
//!
//! # Examples
//!
//! ```
//! use en_inflector::{from_past, get_all_tenses, pluralize, singularize, to_past};
//!
//! assert_eq!(pluralize("city"), "cities");
//! assert_eq!(pluralize("person"), "people");
//! assert_eq!(pluralize("sheep"), "sheep");
//! assert_eq!(singularize("boxes"), "box");
//!
//! assert_eq!(to_past("walk"), "walked");
//! assert_eq!(from_past("took"), "take");
//! assert_eq!(
//!     get_all_tenses("stop"),
//!     ["stop", "stopped", "stopped", "stops", "stopping"],
//! );
//! ```
//!
//! There are also [Noun](noun::Noun) and [Verb](verb::Verb) structs which
//! implement the [Term](term::Term) trait.
//!
//! # Debugging
//!
//! Build with the `debug` feature to print which table entry or rule each
//! conversion matched.

mod util;

pub mod ll;
pub mod noun;
pub mod tense;
pub mod term;
pub mod verb;

use std::borrow::Cow;
use tense::Tense;

/// Returns the plural form of a noun.
pub fn pluralize(word: &str) -> Cow<'_, str> {
    ll::nouns::convert_to_plural(word)
}

/// Returns the singular form of a noun.
pub fn singularize(word: &str) -> Cow<'_, str> {
    ll::nouns::convert_to_singular(word)
}

/// Converts a verb from the `from` tense to the `to` tense. If `from` is not
/// [Tense::Present] the verb is always converted to the present tense.
pub fn convert_tense(word: &str, from: Tense, to: Tense) -> Cow<'_, str> {
    ll::verbs::convert(word, from, to)
}

/// Converts a present tense verb to the past tense, so "take" becomes "took".
pub fn to_past(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Present, Tense::Past)
}

/// Converts a present tense verb to the past participle, so "take" becomes
/// "taken".
pub fn to_perfect(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Present, Tense::Perfect)
}

/// Converts a present tense verb to the third person singular, so "take"
/// becomes "takes".
pub fn to_singular(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Present, Tense::Singular)
}

/// Converts a present tense verb to the present participle, so "take" becomes
/// "taking".
pub fn to_continuous(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Present, Tense::Continuous)
}

/// Converts a past tense verb to the present tense, so "took" becomes "take".
pub fn from_past(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Past, Tense::Present)
}

/// Converts a past participle to the present tense, so "taken" becomes
/// "take".
pub fn from_perfect(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Perfect, Tense::Present)
}

/// Converts a third person singular verb to the present tense, so "takes"
/// becomes "take".
pub fn from_singular(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Singular, Tense::Present)
}

/// Converts a present participle to the present tense, so "taking" becomes
/// "take".
pub fn from_continuous(word: &str) -> Cow<'_, str> {
    convert_tense(word, Tense::Continuous, Tense::Present)
}

/// Returns a present tense verb in every tense, in the order present, past,
/// perfect, singular, and continuous. The first element is always the word
/// itself.
pub fn get_all_tenses(word: &str) -> [Cow<'_, str>; 5] {
    Tense::ALL.map(|t| convert_tense(word, Tense::Present, t))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    #[test]
    fn nouns() {
        let tests = [
            ("book", "books"),
            ("box", "boxes"),
            ("church", "churches"),
            ("city", "cities"),
            ("ox", "oxen"),
            ("genus", "genera"),
            ("quiz", "quizzes"),
            ("person", "people"),
            ("child", "children"),
        ];
        for test in tests {
            assert_eq!(
                super::pluralize(test.0),
                test.1,
                "pluralize({}) = {}",
                test.0,
                test.1,
            );
            assert_eq!(
                super::singularize(test.1),
                test.0,
                "singularize({}) = {}",
                test.1,
                test.0,
            );
        }
    }

    #[test]
    fn uncountable_nouns() {
        for word in crate::ll::nouns::UNCOUNTABLE {
            assert_eq!(super::pluralize(word), *word);
            assert_eq!(super::singularize(word), *word);
        }
    }

    #[test]
    fn verbs() {
        assert_eq!(super::to_past("walk"), "walked");
        assert_eq!(super::to_perfect("walk"), "walked");
        assert_eq!(super::to_singular("walk"), "walks");
        assert_eq!(super::to_continuous("walk"), "walking");
        assert_eq!(super::from_past("walked"), "walk");
        assert_eq!(super::from_perfect("walked"), "walk");
        assert_eq!(super::from_singular("walks"), "walk");
        assert_eq!(super::from_continuous("walking"), "walk");

        assert_eq!(super::from_past("took"), "take");
        assert_eq!(super::from_perfect("taken"), "take");
        assert_eq!(super::from_singular("takes"), "take");
        assert_eq!(super::from_continuous("taking"), "take");

        assert_eq!(super::to_past("is"), "was");
        assert_eq!(super::from_past("was"), "is");
    }

    #[test]
    fn get_all_tenses() {
        let tests = [
            ("walk", ["walk", "walked", "walked", "walks", "walking"]),
            ("go", ["go", "went", "gone", "goes", "going"]),
            ("be", ["be", "was", "been", "is", "being"]),
            ("will", ["will", "would", "would", "will", "will"]),
        ];
        for test in tests {
            assert_eq!(
                super::get_all_tenses(test.0),
                test.1,
                "get_all_tenses({}) = {:?}",
                test.0,
                test.1,
            );
        }
        assert!(matches!(
            super::get_all_tenses("walk")[0],
            Cow::Borrowed("walk"),
        ));
    }

    #[test]
    fn determinism() {
        for word in ["person", "cities", "walked", "stop", ""] {
            assert_eq!(super::pluralize(word), super::pluralize(word));
            assert_eq!(super::singularize(word), super::singularize(word));
            assert_eq!(super::get_all_tenses(word), super::get_all_tenses(word));
        }
    }
}
