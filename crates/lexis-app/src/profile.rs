use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lexis_config::Config;

use crate::cli::Cli;

/// Load a JSON config file
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Resolve the effective config: file if given, else environment, then CLI overrides
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => Config::new(),
    };

    if let Some(path) = &cli.en_fr {
        config.dictionary.en_fr_path = path.clone();
    }
    if let Some(path) = &cli.fr_en {
        config.dictionary.fr_en_path = path.clone();
    }
    if cli.no_lemmatizer {
        config.lemmatizer.enabled = false;
    }

    Ok(config)
}
