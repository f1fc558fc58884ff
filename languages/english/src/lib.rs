pub mod irregular;
pub mod lemmatizer;

pub use lemmatizer::{EnglishLemmatizer, PartOfSpeech};
