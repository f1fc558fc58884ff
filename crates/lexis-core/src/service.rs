use crate::error::LookupError;
use crate::normalize::{normalize, or_not_found};
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::search::SearchEngine;
use crate::types::LookupResponse;

/// Request boundary: clean, search, normalize
pub struct LookupService {
    engine: SearchEngine,
}

impl LookupService {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn lookup(&self, word: &str) -> Result<LookupResponse, LookupError> {
        if word.trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let cleaned_word = DefaultPreprocessor.process(word);
        let results = self.engine.search(&cleaned_word);
        let translations = or_not_found(normalize(results));

        Ok(LookupResponse {
            input_word: word.to_string(),
            cleaned_word,
            translations,
        })
    }
}
