use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lexis", about = "English <-> French dictionary lookup service")]
pub struct Cli {
    /// JSON config file, replaces environment-derived settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// English -> French dictionary file
    #[arg(long, global = true)]
    pub en_fr: Option<String>,

    /// French -> English dictionary file
    #[arg(long, global = true)]
    pub fr_en: Option<String>,

    /// Look up exact headwords only
    #[arg(long, global = true)]
    pub no_lemmatizer: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service (default)
    Serve {
        /// Listen address, overrides BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Translate one word and print the JSON response
    Lookup {
        /// Word or phrase, e.g. `to eat` or `les pommes`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
}
