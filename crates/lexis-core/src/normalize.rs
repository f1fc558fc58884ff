use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Returned in place of an empty result list
pub const NOT_FOUND: &str = "Translation not found.";

/// Phonetic annotation `/.../` plus the whitespace in front of it
static PHONETICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/[^/]+/").expect("valid phonetics pattern"));

/// Whitespace run after a closing brace
static BRACE_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\s+").expect("valid brace pattern"));

/// Strip phonetic annotations. Repeats until stable, since a removal can
/// join two stray slashes into a fresh annotation.
pub fn remove_phonetics(text: &str) -> String {
    let mut text = text.to_string();
    while PHONETICS.is_match(&text) {
        text = PHONETICS.replace_all(&text, "").into_owned();
    }
    text
}

/// Collapse whitespace after `}` to a single space
pub fn remove_extra_spaces(text: &str) -> String {
    BRACE_SPACING.replace_all(text, "} ").into_owned()
}

/// Clean one formatted result
pub fn clean_result(text: &str) -> String {
    remove_extra_spaces(&remove_phonetics(text))
        .trim()
        .to_string()
}

/// Clean every result and drop duplicates, keeping first occurrences in order
pub fn normalize<I, S>(results: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();

    for result in results {
        let cleaned = clean_result(result.as_ref());
        if seen.insert(cleaned.clone()) {
            deduped.push(cleaned);
        }
    }

    deduped
}

/// Substitute the sentinel for an empty list
pub fn or_not_found(results: Vec<String>) -> Vec<String> {
    if results.is_empty() {
        vec![NOT_FOUND.to_string()]
    } else {
        results
    }
}
