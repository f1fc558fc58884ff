use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Query as received
    pub input_word: String,
    /// Form actually searched
    pub cleaned_word: String,
    /// Labeled translations, or the single not-found sentinel
    pub translations: Vec<String>,
}
