//! Low-level tables and the resolvers that walk them.
//!
//! Most users should use the functions at the crate root or the [Noun] and
//! [Verb] structs instead. Everything in here works on a single word and
//! returns the word unchanged when nothing in the tables applies.
//!
//! [Noun]: crate::noun::Noun
//! [Verb]: crate::verb::Verb

pub mod nouns;
pub mod verbs;

use regex::Regex;

/// Compiles a built-in table pattern case-insensitively. Table patterns are
/// constants, so a pattern that fails to parse is a bug and panics.
pub(crate) fn compile(pattern: &str) -> Regex {
    let re = format!("(?i){}", pattern);
    Regex::new(&re).unwrap_or_else(|e| panic!("Could not parse regex {}: {}", re, e))
}

/// A compiled recognizer plus the replacement template used when it matches.
#[derive(Debug)]
pub(crate) struct Transformation {
    recognizer: Regex,
    replacement: String,
}

impl Transformation {
    /// Compiles `pattern` case-insensitively. The pattern must be anchored at
    /// the end of the string.
    pub(crate) fn new(pattern: &str, replacement: impl Into<String>) -> Self {
        Self {
            recognizer: compile(pattern),
            replacement: replacement.into(),
        }
    }

    /// Applies the transformation to `word`. Everything before the match is
    /// kept and the match itself is replaced by the expanded template. Any
    /// `${n}` reference to a group that did not take part in the match
    /// expands to an empty string.
    pub(crate) fn apply(&self, word: &str) -> Option<String> {
        let caps = self.recognizer.captures(word)?;
        let whole = caps.get(0)?;

        let mut new_word = String::with_capacity(word.len() + self.replacement.len());
        new_word.push_str(&word[..whole.start()]);
        caps.expand(&self.replacement, &mut new_word);
        new_word.push_str(&word[whole.end()..]);
        Some(new_word)
    }
}

#[cfg(test)]
mod tests {
    use super::{compile, Transformation};

    #[test]
    fn compile_ignores_case() {
        let re = compile(r"\A(st)and$");
        assert!(re.is_match("stand"));
        assert!(re.is_match("STAND"));
        assert!(!re.is_match("understand"));
    }

    #[test]
    fn apply_keeps_the_unmatched_prefix() {
        let t = Transformation::new("ies$", "y");
        assert_eq!(t.apply("cities").as_deref(), Some("city"));
        assert_eq!(t.apply("CITIES").as_deref(), Some("CITy"));
        assert_eq!(t.apply("city"), None);
    }

    #[test]
    fn apply_elides_groups_that_did_not_match() {
        let t = Transformation::new("(d|(a|e|i|o|u)n|p)uses$", "${1}us");
        assert_eq!(t.apply("bonuses").as_deref(), Some("bonus"));
        assert_eq!(t.apply("campuses").as_deref(), Some("campus"));
        assert_eq!(t.apply("cases"), None);

        let t = Transformation::new("(x)?(y)$", "[${1}${2}]");
        assert_eq!(t.apply("ay").as_deref(), Some("a[y]"));
        assert_eq!(t.apply("axy").as_deref(), Some("a[xy]"));
    }

    #[test]
    fn apply_with_anchored_context() {
        let t = Transformation::new(r"\A(.*[^aeiouy])y$", "${1}ies");
        assert_eq!(t.apply("city").as_deref(), Some("cities"));
        assert_eq!(t.apply("boy"), None);
        assert_eq!(t.apply("y"), None);
    }
}
