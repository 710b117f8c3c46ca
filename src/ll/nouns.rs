//! Noun exception tables, plural and singular rules, and the resolvers that
//! use them.

use crate::{ll::Transformation, util};
use once_cell::sync::Lazy;
use std::{borrow::Cow, collections::HashMap};

/// Nouns whose plural is the same as their singular. A word is uncountable if
/// it *ends* with one of these, so "goldfish" and "reindeer" are covered too.
pub static UNCOUNTABLE: &[&str] = &[
    "aircraft",
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "shrimp",
    "sms",
    "moose",
    "bison",
    "deer",
    "means",
    "scissors",
    "swine",
    "salmon",
    "scum",
    "sorghum",
    "meerschuam",
    "offspring",
    "phoenix",
    "talcum",
    "vespers",
    "wampum",
];

/// Irregular nouns that are matched against the end of a word, so that
/// "salesperson" becomes "salespeople". Order matters, since the first entry
/// that matches wins.
pub static IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("tooth", "teeth"),
];

/// Nouns with irregular plurals that only apply to the exact word. These are
/// matched case-sensitively.
pub static RESERVED: &[(&str, &str)] = &[
    ("ox", "oxen"),
    ("genus", "genera"),
    ("corpus", "corpora"),
    ("concerto", "concerti"),
    ("bus", "buses"),
    ("virus", "viruses"),
    ("apparatus", "apparatuses"),
    ("die", "dice"),
    ("this", "these"),
    ("that", "those"),
    ("quiz", "quizzes"),
    ("polka", "polkas"),
    ("passerby", "passersby"),
    ("sarcoma", "sarcomata"),
    ("schema", "schemata"),
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("cherub", "cherubim"),
    ("kibbutz", "kibbutzim"),
    ("seraph", "seraphim"),
    ("mum", "mums"),
    ("boa", "boe"),
];

// Each rule is (context, suffix, replacement). The context is a single
// capturing group that must cover everything before the suffix. The last
// rule matches anything.
static PLURAL_RULES: &[(&str, &str, &str)] = &[
    ("(.*)", "eau", "eaux"),
    ("(.*)", "menon", "mena"),
    ("(.*)", "terion", "teria"),
    ("(.*m|(?:.*[^b])?l)", "ouse", "ice"),
    ("(.*[dlr])", "ix", "ices"),
    ("(.*[dpt])", "ex", "ices"),
    ("(.*(?:ar|f|oo))", "f", "fs"),
    ("(.*)", "(?:fe|f)", "ves"),
    ("(.*[aeioulnp])", "o", "os"),
    ("(.*(?:o|x|z|ch|ss|sh))", "", "es"),
    ("(.*)", "-in-law", "s-in-law"),
    ("(.*)", "ful", "sful"),
    ("(.*)", "is", "es"),
    ("(.*(?:d|[aeiouy]n|p|pl|r|s|t))", "us", "uses"),
    ("(.*bu)", "s", "ses"),
    ("(.*)", "us", "i"),
    (
        "(.*(?:a|b|dumd|e|g|h|k|(?:d|l|p|s|sy)l|o|r|s))",
        "um",
        "ums",
    ),
    ("(.*)", "um", "a"),
    ("(.*[aeiou])", "a", "as"),
    ("(.*)", "a", "ae"),
    ("(.*(?:[^aeiouy]|qu))", "y", "ies"),
    ("(.*)", "s", "ses"),
    ("(.*)", "", "s"),
];

// Each rule is (pattern, replacement template). Patterns are matched anywhere
// in the word but are all anchored to its end.
static SINGULAR_RULES: &[(&str, &str)] = &[
    ("eaux$", "eau"),
    ("mena$", "menon"),
    ("teria$", "terion"),
    ("([ml])ice$", "${1}ouse"),
    ("([lr])ices$", "${1}ix"),
    ("([dpt])ices$", "${1}ex"),
    ("([lr])ves$", "${1}f"),
    ("ives$", "ife"),
    ("ves$", "f"),
    ("os$", "o"),
    ("(o|x|z|ch|ss|sh)es$", "${1}"),
    ("s-in-law$", "-in-law"),
    ("sful$", "ful"),
    ("(d|(a|e|i|o|u)n|p|pl|r|s|t)uses$", "${1}us"),
    ("(a|b|dumd|e|g|h|k|(d|l|p|s|sy)l|o|r|s)ums$", "${1}um"),
    ("a$", "um"),
    ("i$", "us"),
    ("ies$", "y"),
    ("ses$", "s"),
    ("es$", "is"),
    ("(a|e|i|o|u)as$", "${1}a"),
    ("ae$", "a"),
    ("s$", ""),
];

static RESERVED_PLURAL_OF: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| RESERVED.iter().copied().collect());

static RESERVED_SINGULAR_OF: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| RESERVED.iter().map(|(s, p)| (*p, *s)).collect());

static IRREGULAR_SINGULARS: Lazy<Vec<(&'static str, &'static str)>> =
    Lazy::new(|| IRREGULAR.iter().map(|(s, p)| (*p, *s)).collect());

static SINGULAR_TO_PLURAL_TRANSFORMATIONS: Lazy<Vec<Transformation>> = Lazy::new(|| {
    PLURAL_RULES
        .iter()
        .map(|(context, suffix, replacement)| {
            Transformation::new(
                &format!(r"\A{}{}$", context, suffix),
                format!("${{1}}{}", replacement),
            )
        })
        .collect()
});

static PLURAL_TO_SINGULAR_TRANSFORMATIONS: Lazy<Vec<Transformation>> = Lazy::new(|| {
    SINGULAR_RULES
        .iter()
        .map(|(pattern, replacement)| Transformation::new(pattern, *replacement))
        .collect()
});

/// Returns true if the word ends with one of the [UNCOUNTABLE] nouns,
/// ignoring case.
pub fn is_uncountable(word: &str) -> bool {
    let lc_word = util::lowercase(word);
    UNCOUNTABLE.iter().any(|u| lc_word.ends_with(*u))
}

/// Returns the plural form of the given noun. If nothing applies the word
/// is returned as is.
pub fn convert_to_plural(word: &str) -> Cow<'_, str> {
    if is_uncountable(word) {
        #[cfg(feature = "debug")]
        println!(r#"  word '{}' is uncountable"#, word);
        return Cow::Borrowed(word);
    }

    if let Some(plural) = RESERVED_PLURAL_OF.get(word) {
        #[cfg(feature = "debug")]
        println!(r#"  word '{}' is reserved and became {}"#, word, plural);
        return Cow::Borrowed(*plural);
    }

    if let Some(new_word) = convert_irregular(word, IRREGULAR.iter().copied()) {
        return Cow::Owned(new_word);
    }

    apply_first(word, &SINGULAR_TO_PLURAL_TRANSFORMATIONS)
}

/// Returns the singular form of the given noun. If nothing applies the word
/// is returned as is.
pub fn convert_to_singular(word: &str) -> Cow<'_, str> {
    if is_uncountable(word) {
        #[cfg(feature = "debug")]
        println!(r#"  word '{}' is uncountable"#, word);
        return Cow::Borrowed(word);
    }

    if let Some(singular) = RESERVED_SINGULAR_OF.get(word) {
        #[cfg(feature = "debug")]
        println!(r#"  word '{}' is reserved and became {}"#, word, singular);
        return Cow::Borrowed(*singular);
    }

    if let Some(new_word) = convert_irregular(word, IRREGULAR_SINGULARS.iter().copied()) {
        return Cow::Owned(new_word);
    }

    apply_first(word, &PLURAL_TO_SINGULAR_TRANSFORMATIONS)
}

fn convert_irregular<'a>(
    word: &str,
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> Option<String> {
    for (from, to) in pairs {
        if let Some(new_word) = util::replace_suffix_preserving_case(word, from, to) {
            #[cfg(feature = "debug")]
            println!(r#"  word '{}' matched irregular '{}' and became {}"#, word, from, new_word);
            return Some(new_word);
        }
    }
    None
}

fn apply_first<'a>(word: &'a str, transformations: &[Transformation]) -> Cow<'a, str> {
    for (_i, t) in transformations.iter().enumerate() {
        if let Some(new_word) = t.apply(word) {
            #[cfg(feature = "debug")]
            println!(r#"  word '{}' matched {:?} (idx {}) and became {}"#, word, t, _i, new_word);
            return Cow::Owned(new_word);
        }
    }
    Cow::Borrowed(word)
}
