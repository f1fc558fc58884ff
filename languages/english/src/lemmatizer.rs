use std::collections::HashSet;

use lexis_core::language::{Language, LemmaError, LemmaSet, Lemmatizer};

use crate::irregular::{IRREGULAR_NOUNS, IRREGULAR_VERBS};

/// Noun suffix rewrites, tried in order
const NOUN_SUFFIXES: [(&str, &str); 8] = [
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Verb suffix rewrites, tried in order
const VERB_SUFFIXES: [(&str, &str); 8] = [
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
}

/// Rule-based English lemmatizer.
///
/// Candidates come from an irregular-form table and suffix rewrites; only
/// candidates present in the vocabulary are accepted, and the first one in
/// rule order wins. A word with no accepted candidate is its own lemma.
pub struct EnglishLemmatizer {
    vocabulary: HashSet<String>,
}

impl EnglishLemmatizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashSet::new(),
        }
    }

    /// Accept only base forms found in `words`, typically the EN -> FR headwords
    pub fn with_vocabulary<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocabulary: HashSet<String> = words.into_iter().map(Into::into).collect();
        tracing::info!("English lemmatizer vocabulary: {} words", vocabulary.len());
        Self { vocabulary }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Base form of `word` for `pos`: a known irregular base, then the word
    /// itself if known, then the first known candidate in rule order
    pub fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        if let Some(base) = irregular_base(word, pos).filter(|b| self.vocabulary.contains(*b)) {
            return base.to_string();
        }
        if self.vocabulary.contains(word) {
            return word.to_string();
        }

        self.candidates(word, pos)
            .into_iter()
            .find(|form| self.vocabulary.contains(form))
            .unwrap_or_else(|| word.to_string())
    }

    /// Every candidate base form, unfiltered, in rule order
    pub fn candidates(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        let mut forms: Vec<String> = irregular_base(word, pos)
            .map(String::from)
            .into_iter()
            .collect();

        let suffixes = match pos {
            PartOfSpeech::Noun => &NOUN_SUFFIXES[..],
            PartOfSpeech::Verb => &VERB_SUFFIXES[..],
        };

        for (suffix, replacement) in suffixes {
            // "glass" is not the plural of "glas"
            if *suffix == "s" && word.ends_with("ss") {
                continue;
            }
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                forms.push(format!("{stem}{replacement}"));
            }
        }

        if pos == PartOfSpeech::Verb {
            forms.extend(self.undouble(word));
        }

        forms
    }

    /// "running" -> "run", "stopped" -> "stop"
    fn undouble(&self, word: &str) -> Option<String> {
        let stem = word
            .strip_suffix("ing")
            .or_else(|| word.strip_suffix("ed"))?;

        let mut chars = stem.chars().rev();
        let last = chars.next()?;
        let before = chars.next()?;

        if last == before && !is_vowel(last) {
            let mut base = stem.to_string();
            base.pop();
            Some(base)
        } else {
            None
        }
    }
}

impl Default for EnglishLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

fn irregular_base(word: &str, pos: PartOfSpeech) -> Option<&'static str> {
    let table = match pos {
        PartOfSpeech::Noun => IRREGULAR_NOUNS,
        PartOfSpeech::Verb => IRREGULAR_VERBS,
    };
    table
        .iter()
        .find(|(surface, _)| *surface == word)
        .map(|(_, base)| *base)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

impl Lemmatizer for EnglishLemmatizer {
    fn language(&self) -> Language {
        Language::En
    }

    fn lemmas(&self, word: &str) -> Result<LemmaSet, LemmaError> {
        if word.is_empty() {
            return Err(LemmaError::EmptyInput);
        }

        let mut set = LemmaSet::single(word);
        set.insert(&self.lemmatize(word, PartOfSpeech::Noun));
        set.insert(&self.lemmatize(word, PartOfSpeech::Verb));
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> EnglishLemmatizer {
        EnglishLemmatizer::with_vocabulary([
            "eat", "dog", "box", "church", "city", "man", "woman", "run", "stop", "make",
            "go", "child", "glass", "glasses", "watch", "bus", "care", "car", "hope", "hop",
            "as", "ass", "new", "news",
        ])
    }

    #[test]
    fn test_regular_noun_plurals() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("dogs", PartOfSpeech::Noun), "dog");
        assert_eq!(l.lemmatize("boxes", PartOfSpeech::Noun), "box");
        assert_eq!(l.lemmatize("churches", PartOfSpeech::Noun), "church");
        assert_eq!(l.lemmatize("cities", PartOfSpeech::Noun), "city");
        assert_eq!(l.lemmatize("women", PartOfSpeech::Noun), "woman");
        assert_eq!(l.lemmatize("buses", PartOfSpeech::Noun), "bus");
    }

    #[test]
    fn test_first_known_candidate_wins() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("caring", PartOfSpeech::Verb), "care");
        assert_eq!(l.lemmatize("hoping", PartOfSpeech::Verb), "hope");

        let set = l.lemmas("caring").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["caring", "care"]);
    }

    #[test]
    fn test_known_word_is_kept() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("glasses", PartOfSpeech::Noun), "glasses");
        assert_eq!(l.lemmatize("news", PartOfSpeech::Noun), "news");
    }

    #[test]
    fn test_double_s_is_not_a_plural() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("ass", PartOfSpeech::Noun), "ass");
        assert_eq!(l.lemmatize("kiss", PartOfSpeech::Noun), "kiss");
        assert!(!l.candidates("kiss", PartOfSpeech::Noun).contains(&"kis".to_string()));
    }

    #[test]
    fn test_irregular_forms() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("children", PartOfSpeech::Noun), "child");
        assert_eq!(l.lemmatize("ate", PartOfSpeech::Verb), "eat");
        assert_eq!(l.lemmatize("went", PartOfSpeech::Verb), "go");
    }

    #[test]
    fn test_regular_verb_forms() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("eats", PartOfSpeech::Verb), "eat");
        assert_eq!(l.lemmatize("eating", PartOfSpeech::Verb), "eat");
        assert_eq!(l.lemmatize("making", PartOfSpeech::Verb), "make");
        assert_eq!(l.lemmatize("watches", PartOfSpeech::Verb), "watch");
    }

    #[test]
    fn test_doubled_consonant() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("running", PartOfSpeech::Verb), "run");
        assert_eq!(l.lemmatize("stopped", PartOfSpeech::Verb), "stop");
    }

    #[test]
    fn test_unknown_word_is_its_own_lemma() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("xyzzies", PartOfSpeech::Noun), "xyzzies");
        assert_eq!(EnglishLemmatizer::new().lemmatize("dogs", PartOfSpeech::Noun), "dogs");
    }

    #[test]
    fn test_lemmas_set_holds_word_noun_and_verb() {
        let l = lemmatizer();

        let set = l.lemmas("eat").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["eat"]);

        let set = l.lemmas("watches").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["watches", "watch"]);

        assert!(matches!(l.lemmas(""), Err(LemmaError::EmptyInput)));
    }
}
