use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::lemmatizer::LemmatizerConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;

pub mod dictionary;
pub mod lemmatizer;
pub mod logging;
pub mod server;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub server: ServerConfig,
    pub lemmatizer: LemmatizerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            server: ServerConfig::new(),
            lemmatizer: LemmatizerConfig::new(),
            logging: LoggingConfig::new(),
        }
    }
}

/// Parse a boolean env var, accepting 1/0, true/false, yes/no, on/off
pub(crate) fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"server": {"bind_addr": "127.0.0.1:9000"}}"#).unwrap();

        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.dictionary.en_fr_path, "en-fr-enwiktionary.txt");
        assert_eq!(config.dictionary.fr_en_path, "fr-en-enwiktionary.txt");
        assert!(config.lemmatizer.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut config = Config::default();
        config.lemmatizer.enabled = false;
        config.logging.format = logging::LogFormat::Json;

        let text = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&text).unwrap();

        assert!(!back.lemmatizer.enabled);
        assert_eq!(back.logging.format, logging::LogFormat::Json);
    }
}
