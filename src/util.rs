use std::borrow::Cow;

pub(crate) fn is_lowercase(word: &str) -> bool {
    word.chars()
        .all(|c| c.is_lowercase() || !c.is_ascii_alphabetic())
}

/// Returns the word in lower case, borrowing it when no change is needed.
pub(crate) fn lowercase(word: &str) -> Cow<'_, str> {
    if is_lowercase(word) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

/// Returns the byte offset where `suffix` starts if `word` ends with it,
/// ignoring ASCII case. The suffix must be ASCII.
pub(crate) fn find_suffix_ignore_ascii_case(word: &str, suffix: &str) -> Option<usize> {
    if suffix.is_empty() || word.len() < suffix.len() {
        return None;
    }
    let start = word.len() - suffix.len();
    if word.as_bytes()[start..].eq_ignore_ascii_case(suffix.as_bytes()) {
        // Every byte in the matched region is ASCII, so `start` is a char
        // boundary.
        return Some(start);
    }
    None
}

/// Replaces `suffix` at the end of `word` with `replacement`. The first
/// character of the replacement takes the case of the first character of the
/// matched suffix in `word`, and the rest of the replacement is used as
/// written. So replacing "person" with "people" turns "Person" into "People"
/// and "salesperson" into "salespeople".
///
/// Returns `None` if `word` does not end with `suffix` (compared without
/// regard to ASCII case).
pub(crate) fn replace_suffix_preserving_case(
    word: &str,
    suffix: &str,
    replacement: &str,
) -> Option<String> {
    let start = find_suffix_ignore_ascii_case(word, suffix)?;
    let (head, matched) = word.split_at(start);

    let mut new_word = String::with_capacity(head.len() + replacement.len());
    new_word.push_str(head);

    let mut replacement_chars = replacement.chars();
    if let (Some(orig), Some(first)) = (matched.chars().next(), replacement_chars.next()) {
        if orig.eq_ignore_ascii_case(&first) {
            new_word.push(orig);
        } else if orig.is_uppercase() {
            new_word.extend(first.to_uppercase());
        } else {
            new_word.extend(first.to_lowercase());
        }
    }
    new_word.push_str(replacement_chars.as_str());

    Some(new_word)
}
