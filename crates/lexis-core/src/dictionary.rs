use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::LoadError;
use crate::language::Direction;

/// Separator between the headword side and the translation side
pub const SIDE_SEPARATOR: &str = "::";

/// Every line of a dictionary file, in file order
#[derive(Debug, Clone, Default)]
pub struct RawLineSet {
    lines: Vec<String>,
}

impl RawLineSet {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.lines.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Normalized headword -> positions in the raw line set, in file order
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl DictionaryIndex {
    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Number of distinct headwords
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Index key of a line: text before the first `{`, trimmed and lowercased.
/// Lines without `{` have no key.
pub fn headword_key(line: &str) -> Option<String> {
    line.split_once('{').map(|(head, _)| head.trim().to_lowercase())
}

/// Build the headword index over `lines`
pub fn build_index(lines: &RawLineSet) -> DictionaryIndex {
    let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();

    for (position, line) in lines.iter().enumerate() {
        if let Some(key) = headword_key(line) {
            buckets.entry(key).or_default().push(position);
        }
    }

    DictionaryIndex { buckets }
}

/// Text after the first `::`, if the line has one
pub fn translation_side(line: &str) -> Option<&str> {
    line.split_once(SIDE_SEPARATOR).map(|(_, after)| after)
}

/// One bilingual dictionary file: raw lines plus headword index
#[derive(Debug, Clone)]
pub struct Dictionary {
    direction: Direction,
    raw: RawLineSet,
    index: DictionaryIndex,
}

impl Dictionary {
    pub fn empty(direction: Direction) -> Self {
        Self::from_lines(direction, Vec::<String>::new())
    }

    /// Build from in-memory lines. Lines are trimmed like file lines.
    pub fn from_lines<I, S>(direction: Direction, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = RawLineSet::new(
            lines
                .into_iter()
                .map(|line| line.as_ref().trim().to_string())
                .collect(),
        );
        let index = build_index(&raw);

        Self {
            direction,
            raw,
            index,
        }
    }

    /// Load a dictionary file. A missing file yields an empty dictionary.
    pub fn load(direction: Direction, path: &Path) -> Result<Self, LoadError> {
        tracing::info!("Loading {} dictionary from file: {}", direction, path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Dictionary file {} not found, starting with empty {} dictionary",
                    path.display(),
                    direction
                );
                return Ok(Self::empty(direction));
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut lines = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            match line {
                Ok(line) => lines.push(line),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(LoadError::InvalidEncoding {
                        path: path.to_path_buf(),
                        line: number + 1,
                    });
                }
                Err(source) => {
                    return Err(LoadError::Io {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
        }

        let dict = Self::from_lines(direction, lines);
        let meta = dict.metadata();
        tracing::info!(
            "Loaded {} lines ({} headwords) for {}",
            meta.entries,
            meta.headwords,
            direction
        );
        Ok(dict)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn raw(&self) -> &RawLineSet {
        &self.raw
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Lines indexed under `key`, in file order
    pub fn lines_for(&self, key: &str) -> impl Iterator<Item = &str> {
        self.index
            .get(key)
            .unwrap_or_default()
            .iter()
            .filter_map(|&position| self.raw.get(position))
    }

    pub fn contains_headword(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            direction: self.direction,
            entries: self.raw.len(),
            headwords: self.index.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryMetadata {
    pub direction: Direction,
    pub entries: usize,
    pub headwords: usize,
}
