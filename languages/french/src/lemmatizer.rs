use std::collections::HashSet;

use lexis_core::language::{Language, LemmaError, LemmaSet, Lemmatizer};

use crate::rules::{IRREGULAR, NOMINAL_SUFFIXES, VERBAL_SUFFIXES};

#[derive(Debug, Clone, PartialEq)]
pub struct LemmaCandidate {
    pub base_form: String,
    pub rule: &'static str,
}

/// Rule-based French lemmatizer.
///
/// Tries irregular forms, then nominal/adjectival endings, then verb
/// endings. The first candidate present in the vocabulary is the lemma;
/// endings are not stripped from words already in the vocabulary.
pub struct FrenchLemmatizer {
    vocabulary: HashSet<String>,
}

impl FrenchLemmatizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashSet::new(),
        }
    }

    /// Accept only base forms found in `words`, typically the FR -> EN headwords
    pub fn with_vocabulary<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocabulary: HashSet<String> = words.into_iter().map(Into::into).collect();
        tracing::info!("French lemmatizer vocabulary: {} words", vocabulary.len());
        Self { vocabulary }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Best lemma guess for `word`. A known word is its own lemma unless an
    /// irregular form applies.
    pub fn lemmatize(&self, word: &str) -> String {
        let known = self.vocabulary.contains(word);

        self.candidates(word)
            .into_iter()
            .filter(|c| !known || c.rule == "irregular")
            .find(|c| self.vocabulary.contains(&c.base_form))
            .map(|c| {
                tracing::trace!("{} -> {} ({})", word, c.base_form, c.rule);
                c.base_form
            })
            .unwrap_or_else(|| word.to_string())
    }

    /// Every candidate, unfiltered, in rule order
    pub fn candidates(&self, word: &str) -> Vec<LemmaCandidate> {
        let mut results: Vec<LemmaCandidate> = IRREGULAR
            .iter()
            .filter(|(surface, _)| *surface == word)
            .map(|(_, base)| LemmaCandidate {
                base_form: base.to_string(),
                rule: "irregular",
            })
            .collect();

        results.extend(self.apply(word, NOMINAL_SUFFIXES, "nominal"));
        results.extend(self.apply(word, VERBAL_SUFFIXES, "verbal"));

        results
    }

    fn apply(
        &self,
        word: &str,
        rules: &[(&str, &str)],
        rule: &'static str,
    ) -> Vec<LemmaCandidate> {
        rules
            .iter()
            .filter_map(|(suffix, replacement)| {
                let stem = word.strip_suffix(suffix)?;
                // Keep at least two characters of stem
                if stem.chars().count() < 2 {
                    return None;
                }
                Some(LemmaCandidate {
                    base_form: format!("{stem}{replacement}"),
                    rule,
                })
            })
            .filter(|c| c.base_form != word)
            .collect()
    }
}

impl Default for FrenchLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for FrenchLemmatizer {
    fn language(&self) -> Language {
        Language::Fr
    }

    fn lemmas(&self, word: &str) -> Result<LemmaSet, LemmaError> {
        if word.is_empty() {
            return Err(LemmaError::EmptyInput);
        }

        let mut set = LemmaSet::single(word);
        set.insert(&self.lemmatize(word));
        Ok(set)
    }
}
