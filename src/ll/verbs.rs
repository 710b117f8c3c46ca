//! Verb tables and the tense resolver.
//!
//! Every table row lists a verb's forms in [Tense::ALL] order: present, past,
//! perfect, singular, and continuous. Converting from one tense to another
//! finds the first row whose source form matches and swaps in the target
//! form.

use crate::{ll, tense::Tense};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Auxiliary and modal verbs. These are matched exactly, including case. A
/// `None` slot never matches, and converting to a `None` slot returns the
/// word unchanged, since modals have no singular or continuous form.
///
/// "is" comes before "be" so that "was" becomes "is".
pub static AUXILIARY_VERBS: &[[Option<&str>; 5]] = &[
    [Some("is"), Some("was"), Some("been"), Some("is"), Some("being")],
    [Some("am"), Some("was"), Some("been"), Some("am"), Some("being")],
    [Some("are"), Some("were"), Some("been"), Some("are"), Some("being")],
    [Some("be"), Some("was"), Some("been"), Some("is"), Some("being")],
    [Some("has"), Some("had"), Some("had"), Some("has"), Some("having")],
    [Some("have"), Some("had"), Some("had"), Some("has"), Some("having")],
    [Some("will"), Some("would"), Some("would"), None, None],
    [Some("shall"), Some("should"), Some("should"), None, None],
];

/// Irregular and otherwise special verbs. Each row is a context plus the
/// suffix for each tense. The context is a single capturing group that must
/// cover everything in the word before the suffix, so `("(st)", ["and", ...])`
/// matches "stand" but not "bystand".
pub static TENSE_RULES: &[(&str, [&str; 5])] = &[
    ("(f|bef)", ["all", "ell", "allen", "alls", "alling"]),
    ("(t|sh|mist|overt|undert)", ["ake", "ook", "aken", "akes", "aking"]),
    ("(w|aw)", ["ake", "oke", "oken", "akes", "aking"]),
    ("(m)", ["ake", "ade", "ade", "akes", "aking"]),
    ("(st|underst|withst)", ["and", "ood", "ood", "ands", "anding"]),
    ("(h)", ["ang", "ung", "ung", "angs", "anging"]),
    ("(c|broadc|forec)", ["ast", "ast", "ast", "asts", "asting"]),
    ("(c)", ["atch", "aught", "aught", "atches", "atching"]),
    ("(dr|withdr)", ["aw", "ew", "awn", "aws", "awing"]),
    ("(sl)", ["ay", "ew", "ain", "ays", "aying"]),
    ("(l|p|s|misl|overp|underp|rep|prep|gains)", ["ay", "aid", "aid", "ays", "aying"]),
    ("(t)", ["each", "aught", "aught", "eaches", "eaching"]),
    ("(tr)", ["ead", "od", "odden", "eads", "eading"]),
    ("(l|misl)", ["ead", "ed", "ed", "eads", "eading"]),
    ("(r|spr)", ["ead", "ead", "ead", "eads", "eading"]),
    ("(br|sp)", ["eak", "oke", "oken", "eaks", "eaking"]),
    ("(d)", ["eal", "ealt", "ealt", "eals", "ealing"]),
    ("(st)", ["eal", "ole", "olen", "eals", "ealing"]),
    ("(dr)", ["eam", "eamt", "eamt", "eams", "eaming"]),
    ("(l|m)", ["ean", "eant", "eant", "eans", "eaning"]),
    ("(l)", ["earn", "earnt", "earnt", "earns", "earning"]),
    ("(b|sh|sw|t|w)", ["ear", "ore", "orn", "ears", "earing"]),
    ("(h|overh)", ["ear", "eard", "eard", "ears", "earing"]),
    ("(b)", ["eat", "eat", "eaten", "eats", "eating"]),
    ("(sw)", ["eat", "eat", "eat", "eats", "eating"]),
    ("((?:over)?)", ["eat", "ate", "eaten", "eats", "eating"]),
    ("(bere|l)", ["eave", "eft", "eft", "eaves", "eaving"]),
    ("(w)", ["eave", "ove", "oven", "eaves", "eaving"]),
    ("(s|fores|overs)", ["ee", "aw", "een", "ees", "eeing"]),
    ("(fl)", ["ee", "ed", "ed", "ees", "eeing"]),
    ("(bes)", ["eech", "ought", "ought", "eeches", "eeching"]),
    ("(bl|br|f|sp)", ["eed", "ed", "ed", "eeds", "eeding"]),
    ("(s)", ["eek", "ought", "ought", "eeks", "eeking"]),
    ("(f|kn)", ["eel", "elt", "elt", "eels", "eeling"]),
    ("(cr|k|sl|sw|w)", ["eep", "ept", "ept", "eeps", "eeping"]),
    ("(m)", ["eet", "et", "et", "eets", "eeting"]),
    ("(r)", ["eeve", "ove", "ove", "eeves", "eeving"]),
    ("(fr)", ["eeze", "oze", "ozen", "eezes", "eezing"]),
    ("(s|t|fores|ret)", ["ell", "old", "old", "ells", "elling"]),
    ("(dw|sm|sp)", ["ell", "elt", "elt", "ells", "elling"]),
    ("(sw)", ["ell", "elled", "ollen", "ells", "elling"]),
    ("(m)", ["elt", "elted", "olten", "elts", "elting"]),
    ("(b|l|r|s|sp|unb)", ["end", "ent", "ent", "ends", "ending"]),
    ("(g|forg)", ["et", "ot", "otten", "ets", "etting"]),
    ("(b|l|s|w|res|ups)", ["et", "et", "et", "ets", "etting"]),
    ("(h|s)", ["ew", "ewed", "ewn", "ews", "ewing"]),
    ("((?:fore|under)?)", ["go", "went", "gone", "goes", "going"]),
    ("(st)", ["ick", "uck", "uck", "icks", "icking"]),
    ("(forb)", ["id", "ade", "idden", "ids", "idding"]),
    ("(b|outb|overb)", ["id", "id", "id", "ids", "idding"]),
    ("(l)", ["ie", "ay", "ain", "ies", "ying"]),
    ("(d|l|t|v)", ["ie", "ied", "ied", "ies", "ying"]),
    ("(bet)", ["ide", "ide", "ide", "ides", "iding"]),
    ("(ab|r|str)", ["ide", "ode", "idden", "ides", "iding"]),
    ("(sl)", ["ide", "id", "id", "ides", "iding"]),
    ("(h)", ["ide", "id", "idden", "ides", "iding"]),
    ("(d)", ["ig", "ug", "ug", "igs", "igging"]),
    ("(f)", ["ight", "ought", "ought", "ights", "ighting"]),
    ("(l|al)", ["ight", "it", "it", "ights", "ighting"]),
    ("(str)", ["ike", "uck", "uck", "ikes", "iking"]),
    ("(sp)", ["ill", "ilt", "ilt", "ills", "illing"]),
    ("(sw)", ["im", "am", "um", "ims", "imming"]),
    ("(beg|sp)", ["in", "an", "un", "ins", "inning"]),
    ("(w)", ["in", "on", "on", "ins", "inning"]),
    ("(b|f|gr|w|unw)", ["ind", "ound", "ound", "inds", "inding"]),
    ("(sh)", ["ine", "one", "one", "ines", "ining"]),
    ("(r|s|spr)", ["ing", "ang", "ung", "ings", "inging"]),
    ("(br)", ["ing", "ought", "ought", "ings", "inging"]),
    ("(cl|fl|sl|st|str|sw|wr)", ["ing", "ung", "ung", "ings", "inging"]),
    ("(dr|s|shr|st)", ["ink", "ank", "unk", "inks", "inking"]),
    ("(sl)", ["ink", "unk", "unk", "inks", "inking"]),
    ("(th)", ["ink", "ought", "ought", "inks", "inking"]),
    ("(ar|r)", ["ise", "ose", "isen", "ises", "ising"]),
    ("(f|h|kn|sl|spl)", ["it", "it", "it", "its", "itting"]),
    ("(s|sp)", ["it", "at", "at", "its", "itting"]),
    ("(b)", ["ite", "it", "itten", "ites", "iting"]),
    ("(sm|wr)", ["ite", "ote", "itten", "ites", "iting"]),
    ("(r)", ["ive", "ived", "iven", "ives", "iving"]),
    ("(dr|str)", ["ive", "ove", "iven", "ives", "iving"]),
    ("(g|forg)", ["ive", "ave", "iven", "ives", "iving"]),
    ("(d|outd|overd|red|und)", ["o", "id", "one", "oes", "oing"]),
    ("(sh)", ["oe", "od", "od", "oes", "oeing"]),
    ("(sp)", ["oil", "oilt", "oilt", "oils", "oiling"]),
    ("(h|beh|uph|withh)", ["old", "eld", "eld", "olds", "olding"]),
    ("(c|bec|overc)", ["ome", "ame", "ome", "omes", "oming"]),
    ("(sh)", ["oot", "ot", "ot", "oots", "ooting"]),
    ("(ch)", ["oose", "ose", "osen", "ooses", "oosing"]),
    ("(l)", ["ose", "ost", "ost", "oses", "osing"]),
    ("(c)", ["ost", "ost", "ost", "osts", "osting"]),
    ("(pr)", ["ove", "oved", "oven", "oves", "oving"]),
    ("(bl|gr|kn|thr)", ["ow", "ew", "own", "ows", "owing"]),
    ("(m|s|sh)", ["ow", "owed", "own", "ows", "owing"]),
    ("(r|outr|overr)", ["un", "an", "un", "uns", "unning"]),
    ("(b)", ["urn", "urnt", "urnt", "urns", "urning"]),
    ("(h)", ["urt", "urt", "urt", "urts", "urting"]),
    ("(b|thr)", ["ust", "ust", "ust", "usts", "usting"]),
    ("(b|reb)", ["uild", "uilt", "uilt", "uilds", "uilding"]),
    ("(q)", ["uit", "uit", "uit", "uits", "uitting"]),
    ("(qu|wh)", ["iz", "izzed", "izzed", "izzes", "izzing"]),
    ("(c|h|p|sh)", ["ut", "ut", "ut", "uts", "utting"]),
    // "agree" and "free" keep both e's.
    ("(.*e)", ["e", "ed", "ed", "es", "eing"]),
    ("(.*[^aeiouy])", ["y", "ied", "ied", "ies", "ying"]),
];

// Suffixes for verbs that double their final consonant, as in "stop" =>
// "stopped". The singular is the one form that does not double.
static DOUBLING_SUFFIXES: [&str; 5] = ["", "ed", "ed", "s", "ing"];

// Each rule is (context, doubles). The context has two groups: the stem up
// to and including the vowel, and the final consonant. The first rule that
// matches decides, and a rule that does not double stops the scan, which
// leaves the word to the regular rules. Those rules are for unstressed last
// syllables, so "visit" becomes "visited" while "admit" becomes "admitted".
// A final "s" or "z" is left to the sibilant rule.
static DOUBLING_RULES: &[(&str, bool)] = &[
    ("(.*str[aeiouy])([bcdfghjklmnpqrtv])", true),
    ("((?:pre|re|de|in|con|trans)fe|dete|inte|ave)(r)", true),
    ("(.*[aeiouy].*[^aeiouy][eo])([mnr])", false),
    (
        "((?:aud|benef|cred|depos|ed|exhib|inhab|inher|lim|orb|prof|prohib|solic|vis|vom)i)(t)",
        false,
    ),
    ("((?:buck|budg|mark|pock|rock|targ)e)(t)", false),
    ("((?:devel|envel|gall|scall|wall)o|gossi)(p)", false),
    ("(.*(?:[^aeiouy]|qu)[aeiouy])([bcdfghjklmnpqrtv])", true),
];

// The second group must be a pair of identical letters, which the regex
// crate cannot express, so `undouble_final_consonant` checks it.
static UNDOUBLING_CONTEXT: &str = "(.*(?:[^aeiouy]|qu)[aeiouy])([bdgmnprt]{2})";

// Stems that take back a mute "e" when their suffix is removed, so "baked"
// becomes "bake" and "dances" becomes "dance" but "walked" stays "walk".
const MUTE_E_STEM: &str = "([^aeiou]*[aeiouy][^aeiouwxy]|.*(?:[^aeiou]c|v|[^z]z|dg|[rl]g|[^aeiou][bcdfgkpt]l|[^aeious]s|[aeiou][aeiou]s|[^aeiou]u))";

// Every verb ending in "s" or "z" takes "es", but only these stems give it
// back, so "refuses" still becomes "refuse".
const SIBILANT_STEM: &str = "(.*(?:ch|sh|s|x|z|[^aeiou]o))";
const SIBILANT_STEM_REVERSE: &str = "(.*(?:ch|sh|ss|x|zz|[^aeiou]o|[aeiou]cus))";

// Each rule is (present context, context for every other tense, suffixes).
// The last rule matches anything.
static REGULAR_RULES: &[(&str, &str, [&str; 5])] = &[
    ("(.*)", MUTE_E_STEM, ["e", "ed", "ed", "es", "ing"]),
    (SIBILANT_STEM, SIBILANT_STEM_REVERSE, ["", "ed", "ed", "es", "ing"]),
    ("(.*)", "(.*)", ["", "ed", "ed", "s", "ing"]),
];

#[derive(Debug)]
struct TenseRule {
    suffixes: [&'static str; 5],
    recognizers: Vec<Regex>,
}

impl TenseRule {
    fn new(context: &str, suffixes: [&'static str; 5]) -> Self {
        Self::with_contexts(context, context, suffixes)
    }

    fn with_contexts(present_context: &str, context: &str, suffixes: [&'static str; 5]) -> Self {
        let recognizers = Tense::ALL
            .iter()
            .map(|t| {
                let c = if *t == Tense::Present {
                    present_context
                } else {
                    context
                };
                ll::compile(&format!(r"\A{}{}$", c, suffixes[t.idx()]))
            })
            .collect();
        Self {
            suffixes,
            recognizers,
        }
    }

    fn convert(&self, word: &str, from: Tense, to: Tense) -> Option<String> {
        let caps = self.recognizers[from.idx()].captures(word)?;
        let stem = caps.get(1).map_or("", |m| m.as_str());
        Some(format!("{}{}", stem, self.suffixes[to.idx()]))
    }
}

static COMPILED_TENSE_RULES: Lazy<Vec<TenseRule>> = Lazy::new(|| {
    TENSE_RULES
        .iter()
        .map(|(context, suffixes)| TenseRule::new(context, *suffixes))
        .collect()
});

static COMPILED_REGULAR_RULES: Lazy<Vec<TenseRule>> = Lazy::new(|| {
    REGULAR_RULES
        .iter()
        .map(|(present_context, context, suffixes)| {
            TenseRule::with_contexts(present_context, context, *suffixes)
        })
        .collect()
});

static DOUBLING_RECOGNIZERS: Lazy<Vec<(Regex, bool)>> = Lazy::new(|| {
    DOUBLING_RULES
        .iter()
        .map(|(context, doubles)| (ll::compile(&format!(r"\A{}$", context)), *doubles))
        .collect()
});

static UNDOUBLING_RECOGNIZERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DOUBLING_SUFFIXES
        .iter()
        .map(|suffix| ll::compile(&format!(r"\A{}{}$", UNDOUBLING_CONTEXT, suffix)))
        .collect()
});

/// Converts `word` from one tense to another. Only conversions from the
/// present tense can target any tense. Every other conversion goes to the
/// present tense, whatever `to` says. If nothing matches, or `from` and the
/// resolved target are the same, the word is returned as is.
pub fn convert(word: &str, from: Tense, to: Tense) -> Cow<'_, str> {
    let to = if from == Tense::Present {
        to
    } else {
        Tense::Present
    };
    if from == to {
        return Cow::Borrowed(word);
    }

    if let Some(new_word) = convert_auxiliary(word, from, to) {
        return new_word;
    }

    if let Some(new_word) = apply_first(word, from, to, &COMPILED_TENSE_RULES) {
        return Cow::Owned(new_word);
    }

    let doubled = if from == Tense::Present {
        double_final_consonant(word, to)
    } else {
        undouble_final_consonant(word, from)
    };
    if let Some(new_word) = doubled {
        return Cow::Owned(new_word);
    }

    match apply_first(word, from, to, &COMPILED_REGULAR_RULES) {
        Some(new_word) => Cow::Owned(new_word),
        None => Cow::Borrowed(word),
    }
}

fn convert_auxiliary<'a>(word: &'a str, from: Tense, to: Tense) -> Option<Cow<'a, str>> {
    let row = AUXILIARY_VERBS
        .iter()
        .find(|row| row[from.idx()] == Some(word))?;

    #[cfg(feature = "debug")]
    println!(r#"  word '{}' is an auxiliary verb ({:?})"#, word, row);

    Some(match row[to.idx()] {
        Some(new_word) => Cow::Borrowed(new_word),
        None => Cow::Borrowed(word),
    })
}

fn apply_first(word: &str, from: Tense, to: Tense, rules: &[TenseRule]) -> Option<String> {
    for (_i, rule) in rules.iter().enumerate() {
        if let Some(new_word) = rule.convert(word, from, to) {
            #[cfg(feature = "debug")]
            println!(
                r#"  word '{}' matched {:?} (idx {}) and became {}"#,
                word,
                rule.recognizers[from.idx()],
                _i,
                new_word,
            );
            return Some(new_word);
        }
    }
    None
}

fn double_final_consonant(word: &str, to: Tense) -> Option<String> {
    for (_i, (re, doubles)) in DOUBLING_RECOGNIZERS.iter().enumerate() {
        if let Some(caps) = re.captures(word) {
            if !doubles {
                #[cfg(feature = "debug")]
                println!(r#"  word '{}' matched non-doubling rule {:?} (idx {})"#, word, re, _i);
                return None;
            }

            let (stem, last) = (&caps[1], &caps[2]);
            let suffix = DOUBLING_SUFFIXES[to.idx()];
            let new_word = if to == Tense::Singular {
                format!("{}{}{}", stem, last, suffix)
            } else {
                format!("{}{}{}{}", stem, last, last, suffix)
            };

            #[cfg(feature = "debug")]
            println!(
                r#"  word '{}' matched doubling rule {:?} (idx {}) and became {}"#,
                word, re, _i, new_word,
            );
            return Some(new_word);
        }
    }
    None
}

// Undoes `double_final_consonant` by keeping the doubled pair and then
// dropping the last character of the result. That is only right when the
// present suffix is empty, which it always is for these verbs. Singular
// forms are never doubled, so they are skipped.
fn undouble_final_consonant(word: &str, from: Tense) -> Option<String> {
    if from == Tense::Present || from == Tense::Singular {
        return None;
    }

    let caps = UNDOUBLING_RECOGNIZERS[from.idx()].captures(word)?;
    let pair = &caps[2];
    let mut letters = pair.chars();
    let (first, second) = (letters.next()?, letters.next()?);
    if !first.eq_ignore_ascii_case(&second) {
        return None;
    }

    let mut new_word = format!(
        "{}{}{}",
        &caps[1],
        pair,
        DOUBLING_SUFFIXES[Tense::Present.idx()],
    );
    new_word.pop();

    #[cfg(feature = "debug")]
    println!(r#"  word '{}' had its final consonant undoubled and became {}"#, word, new_word);

    Some(new_word)
}
