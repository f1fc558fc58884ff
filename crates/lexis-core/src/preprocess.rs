use unicode_normalization::UnicodeNormalization;

/// English infinitive marker
const INFINITIVE_MARKER: &str = "to ";

/// French definite articles, checked in order, first match wins
const FRENCH_ARTICLES: [&str; 4] = ["le ", "la ", "les ", "l'"];

pub trait Preprocessor {
    // Default EN/FR query cleaning
    fn process(&self, text: &str) -> String {
        // Composed form so "e\u{301}" matches "é" in the dictionary files
        let text: String = text.nfc().collect();
        let mut word = text.trim().to_lowercase();

        if let Some(rest) = word.strip_prefix(INFINITIVE_MARKER) {
            word = rest.to_string();
        }

        for article in FRENCH_ARTICLES {
            if let Some(rest) = word.strip_prefix(article) {
                word = rest.to_string();
                break;
            }
        }

        word
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Clean a raw query with the default rules
pub fn clean_input(text: &str) -> String {
    DefaultPreprocessor.process(text)
}
