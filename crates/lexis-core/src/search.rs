use std::sync::Arc;

use crate::dictionary::{Dictionary, SIDE_SEPARATOR, translation_side};
use crate::language::{Direction, LemmaSet, Lemmatizer};
use crate::preprocess::clean_input;
use crate::resolver::resolve_headword;
use crate::state::Lexicon;

/// True if the translation side has at least one ASCII letter.
/// Lines without `::` pass.
pub fn translation_has_letters(line: &str) -> bool {
    match translation_side(line) {
        Some(after) => after.chars().any(|c| c.is_ascii_alphabetic()),
        None => true,
    }
}

/// Swap the two sides of a line around the first `::`
pub fn swap_sides(line: &str) -> String {
    match line.split_once(SIDE_SEPARATOR) {
        Some((head, tail)) => format!("{} {} {}", tail.trim(), SIDE_SEPARATOR, head.trim()),
        None => line.to_string(),
    }
}

/// Raw lines whose translation side contains `phrase`, case-insensitively
pub fn find_after_separator<'a>(dict: &'a Dictionary, phrase: &str) -> Vec<&'a str> {
    let needle = phrase.to_lowercase();
    dict.raw()
        .iter()
        .filter(|line| {
            translation_side(line)
                .map(|after| after.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

/// Direct, lemma-expanded and reverse search over a [`Lexicon`]
pub struct SearchEngine {
    lexicon: Arc<Lexicon>,
    english: Arc<dyn Lemmatizer>,
    french: Arc<dyn Lemmatizer>,
}

impl SearchEngine {
    pub fn new(
        lexicon: Arc<Lexicon>,
        english: Arc<dyn Lemmatizer>,
        french: Arc<dyn Lemmatizer>,
    ) -> Self {
        Self {
            lexicon,
            english,
            french,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Clean `raw_word` and search it
    pub fn translate(&self, raw_word: &str) -> Vec<String> {
        self.search(&clean_input(raw_word))
    }

    /// Search an already cleaned word. Results are direction-labeled but not
    /// yet normalized.
    pub fn search(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }

        let guess = self.lexicon.guess_language(word);
        tracing::debug!("Searching '{}' (guessed {:?})", word, guess);

        let mut results = Vec::new();

        // Direct matches, EN -> FR then FR -> EN
        for dict in self.lexicon.dictionaries() {
            for line in resolve_headword(dict, word) {
                if translation_has_letters(line) {
                    results.push(dict.direction().tag(line));
                }
            }
        }
        tracing::debug!("Direct matches: {}", results.len());

        // Lemmatized matches, English pass fully before French
        for (lemmatizer, direction) in [
            (&self.english, Direction::EnFr),
            (&self.french, Direction::FrEn),
        ] {
            let dict = self.lexicon.dictionary(direction);
            for lemma in self.candidates(lemmatizer.as_ref(), word).iter() {
                for line in resolve_headword(dict, lemma) {
                    if !translation_has_letters(line) {
                        continue;
                    }
                    let tagged = direction.tag(line);
                    if !results.contains(&tagged) {
                        results.push(tagged);
                    }
                }
            }
        }

        if results.is_empty() {
            results = self.reverse_search(word, guess.direction());
            tracing::debug!("Reverse matches: {}", results.len());
        }

        results
    }

    /// Match against translation sides of both raw files.
    /// Every hit gets the same `label`, whichever file it came from.
    pub fn reverse_search(&self, word: &str, label: Direction) -> Vec<String> {
        self.lexicon
            .dictionaries()
            .iter()
            .flat_map(|dict| find_after_separator(dict, word))
            .filter(|line| translation_has_letters(line))
            .map(|line| label.tag(&swap_sides(line)))
            .collect()
    }

    /// Lemma candidates, degrading to the word alone on failure
    fn candidates(&self, lemmatizer: &dyn Lemmatizer, word: &str) -> LemmaSet {
        match lemmatizer.lemmas(word) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(
                    "{} lemmatizer failed for '{}': {}",
                    lemmatizer.language().code(),
                    word,
                    e
                );
                LemmaSet::single(word)
            }
        }
    }
}
