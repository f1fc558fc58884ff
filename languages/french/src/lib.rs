pub mod lemmatizer;
pub mod rules;

pub use lemmatizer::{FrenchLemmatizer, LemmaCandidate};
