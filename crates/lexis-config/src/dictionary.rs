use std::env;

use serde::{Deserialize, Serialize};

fn default_en_fr_path() -> String {
    "en-fr-enwiktionary.txt".to_string()
}

fn default_fr_en_path() -> String {
    "fr-en-enwiktionary.txt".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// English -> French dictionary file
    #[serde(default = "default_en_fr_path")]
    pub en_fr_path: String,
    /// French -> English dictionary file
    #[serde(default = "default_fr_en_path")]
    pub fr_en_path: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            en_fr_path: env::var("EN_FR_FILE").unwrap_or_else(|_| default_en_fr_path()),
            fr_en_path: env::var("FR_EN_FILE").unwrap_or_else(|_| default_fr_en_path()),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            en_fr_path: default_en_fr_path(),
            fr_en_path: default_fr_en_path(),
        }
    }
}
