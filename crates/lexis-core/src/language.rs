use std::fmt;

use serde::{Deserialize, Serialize};

/// Source language of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    En,
    Fr,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Dictionary direction whose headwords are in this language
    pub fn direction(&self) -> Direction {
        match self {
            Language::En => Direction::EnFr,
            Language::Fr => Direction::FrEn,
        }
    }
}

/// Translation direction of a dictionary file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    EnFr,
    FrEn,
}

impl Direction {
    /// Prefix used on every formatted result
    pub fn label(&self) -> &'static str {
        match self {
            Direction::EnFr => "EN -> FR",
            Direction::FrEn => "FR -> EN",
        }
    }

    /// Language of the headword side
    pub fn source(&self) -> Language {
        match self {
            Direction::EnFr => Language::En,
            Direction::FrEn => Language::Fr,
        }
    }

    /// Format a dictionary line as `"<DIR>: <line>"`
    pub fn tag(&self, line: &str) -> String {
        format!("{}: {}", self.label(), line)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maximum number of candidates a lemmatizer may return:
/// the original word plus at most two guessed base forms.
pub const LEMMA_CAPACITY: usize = 3;

/// Small insertion-ordered set of candidate base forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaSet {
    slots: [Option<String>; LEMMA_CAPACITY],
}

impl LemmaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding only `word`
    pub fn single(word: &str) -> Self {
        let mut set = Self::new();
        set.insert(word);
        set
    }

    /// Insert a candidate. Returns `false` if it was already present,
    /// empty, or the set is full.
    pub fn insert(&mut self, form: &str) -> bool {
        if form.is_empty() || self.contains(form) {
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(form.to_string());
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, form: &str) -> bool {
        self.iter().any(|f| f == form)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }
}

/// Morphological collaborator: maps a surface form to candidate base forms
pub trait Lemmatizer: Send + Sync {
    /// Language this lemmatizer handles
    fn language(&self) -> Language;

    /// Candidate base forms for `word`, always including `word` itself
    fn lemmas(&self, word: &str) -> Result<LemmaSet, LemmaError>;
}

/// Lemmatizer that only ever returns the word itself
pub struct IdentityLemmatizer {
    language: Language,
}

impl IdentityLemmatizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl Lemmatizer for IdentityLemmatizer {
    fn language(&self) -> Language {
        self.language
    }

    fn lemmas(&self, word: &str) -> Result<LemmaSet, LemmaError> {
        if word.is_empty() {
            return Err(LemmaError::EmptyInput);
        }
        Ok(LemmaSet::single(word))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LemmaError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Lemmatizer unavailable: {0}")]
    Unavailable(String),
}
