//! Provides the [Term] trait, which defines methods shared by all word
//! structs.

use std::borrow::Cow;

/// This trait is implemented by all words, which means nouns and verbs.
pub trait Term<'a> {
    fn new(word: &'a str) -> Self;

    /// Returns the singular form of the given word. For a verb this is the
    /// third person singular present form, so "walk" becomes "walks". If
    /// nothing applies it will return the word given to `new`. Whenever
    /// possible this method avoids allocating a new
    /// [String](std::string::String).
    fn singular(&self) -> Cow<'a, str>;

    /// Returns the plural form of the given word. For a verb this is the
    /// present form, so "walks" becomes "walk". If nothing applies it will
    /// return the word given to `new`. The case of the word is kept where the
    /// rules allow, so "Person" becomes "People" and "City" becomes
    /// "Cities". Whenever possible this method avoids allocating a new
    /// [String](std::string::String).
    fn plural(&self) -> Cow<'a, str>;
}
