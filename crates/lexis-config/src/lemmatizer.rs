use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LemmatizerConfig {
    /// When false, only the cleaned word itself is looked up
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl LemmatizerConfig {
    pub fn new() -> Self {
        Self {
            enabled: env_flag("LEMMATIZER_ENABLED").unwrap_or_else(default_enabled),
        }
    }
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}
