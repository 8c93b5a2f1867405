use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::models::Error;

/// A case-normalized set of words excluded from frequency counting.
///
/// Loaded once from a newline-delimited file and immutable afterward, so a
/// single instance may be shared read-only across extraction runs.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// An empty set; no words are filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from an in-memory word list. Words are lowercased on
    /// insert; duplicates collapse.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|word| word.to_lowercase()).collect(),
        }
    }

    /// Reads a newline-delimited stop-word file. Each line is trimmed of
    /// surrounding whitespace and lowercased; blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::config_load(path, e))?;
        let reader = BufReader::new(file);

        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Error::config_load(path, e))?;
            let word = line.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        Ok(Self { words })
    }

    /// Like [`StopWordSet::load`], but degrades to the empty set when the
    /// file is missing or unreadable, logging the condition instead of
    /// failing. Extraction then proceeds with no words filtered.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(stop_words) => stop_words,
            Err(e) => {
                warn!("{}; continuing with an empty stop-word set", e);
                Self::empty()
            }
        }
    }

    /// Checks membership. Lookups are expected to use already-normalized
    /// (lowercase) words, the form the tokenizer produces.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
