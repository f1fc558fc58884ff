use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 in {path} at line {line}")]
    InvalidEncoding { path: PathBuf, line: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Query is empty")]
    EmptyQuery,
}
