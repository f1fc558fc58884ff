use crate::dictionary::{Dictionary, DictionaryMetadata};
use crate::language::{Direction, Language};

/// Both dictionaries, built once at startup and read-only afterwards
#[derive(Debug, Clone)]
pub struct Lexicon {
    en_fr: Dictionary,
    fr_en: Dictionary,
}

impl Lexicon {
    pub fn new(en_fr: Dictionary, fr_en: Dictionary) -> Self {
        debug_assert_eq!(en_fr.direction(), Direction::EnFr);
        debug_assert_eq!(fr_en.direction(), Direction::FrEn);
        Self { en_fr, fr_en }
    }

    pub fn empty() -> Self {
        Self::new(
            Dictionary::empty(Direction::EnFr),
            Dictionary::empty(Direction::FrEn),
        )
    }

    pub fn dictionary(&self, direction: Direction) -> &Dictionary {
        match direction {
            Direction::EnFr => &self.en_fr,
            Direction::FrEn => &self.fr_en,
        }
    }

    /// Dictionaries in search order: EN -> FR first
    pub fn dictionaries(&self) -> [&Dictionary; 2] {
        [&self.en_fr, &self.fr_en]
    }

    /// Guess the query language from which index knows the word, defaulting to English
    pub fn guess_language(&self, word: &str) -> Language {
        if self.en_fr.contains_headword(word) {
            Language::En
        } else if self.fr_en.contains_headword(word) {
            Language::Fr
        } else {
            Language::En
        }
    }

    pub fn metadata(&self) -> Vec<DictionaryMetadata> {
        self.dictionaries().iter().map(|d| d.metadata()).collect()
    }
}
