use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionary::Dictionary;

/// `SEE: <phrase> ::`, case-insensitive, phrase matched lazily
static SEE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SEE:\s*(.*?)\s*::").expect("valid SEE pattern"));

/// Redirects that resolve to more lines than this are dropped.
/// Kept for output compatibility with existing dictionaries.
pub const MAX_SPLICED_LINES: usize = 2;

/// Target phrase of a `SEE:` redirect, if the line carries a well-formed one
pub fn extract_see_reference(line: &str) -> Option<&str> {
    SEE_REFERENCE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|phrase| !phrase.is_empty())
}

/// Resolve `headword` against `dict`, following `SEE:` redirects depth-first.
///
/// `visited` is shared across the whole resolution chain: a headword already
/// in it yields nothing, so cycles terminate and each headword expands once.
///
/// A redirect resolving to 1..=2 lines is replaced by them, one resolving to
/// nothing is kept verbatim, and one fanning out further is dropped.
pub fn resolve<'a>(
    dict: &'a Dictionary,
    headword: &str,
    visited: &mut HashSet<String>,
) -> Vec<&'a str> {
    let key = headword.to_lowercase();
    if !visited.insert(key.clone()) {
        tracing::trace!("'{}' already visited, skipping", key);
        return Vec::new();
    }

    let mut results = Vec::new();
    for line in dict.lines_for(&key) {
        match extract_see_reference(line) {
            Some(target) => {
                let resolved = resolve(dict, target, visited);
                match resolved.len() {
                    0 => results.push(line),
                    n if n <= MAX_SPLICED_LINES => results.extend(resolved),
                    n => {
                        tracing::debug!(
                            "Dropping redirect '{}' -> '{}' ({} lines)",
                            key,
                            target,
                            n
                        );
                    }
                }
            }
            None => results.push(line),
        }
    }

    results
}

/// Resolve with a fresh visited set
pub fn resolve_headword<'a>(dict: &'a Dictionary, headword: &str) -> Vec<&'a str> {
    let mut visited = HashSet::new();
    resolve(dict, headword, &mut visited)
}
