pub mod dictionary;
pub mod error;
pub mod language;
pub mod normalize;
pub mod preprocess;
pub mod resolver;
pub mod search;
pub mod service;
pub mod state;
pub mod types;

pub use dictionary::Dictionary;
pub use language::{Direction, Language, LemmaSet, Lemmatizer};
pub use search::SearchEngine;
pub use service::LookupService;
pub use state::Lexicon;

#[cfg(test)]
mod tests;
