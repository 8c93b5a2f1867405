use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::constants::DEFAULT_STOP_WORDS_PATH;
use crate::models::{Error, FrequencyCounter, StopWordSet};
use crate::types::{RankedTag, WordFrequencyMap};
use crate::utils::{persist_tags, rank_frequencies, render_display};

/// One extraction session: a stop-word set plus the frequency table of the
/// most recently opened file.
///
/// The session has two observable states: idle (no file loaded, empty table)
/// and loaded (table populated from the last opened file). Opening a new file
/// discards the old table before any new tokens are counted. There is no
/// error terminal state; a failed read leaves the session usable with
/// whatever partial data exists.
pub struct TagExtractor {
    stop_words: StopWordSet,
    table: WordFrequencyMap,
}

impl TagExtractor {
    pub fn new(stop_words: StopWordSet) -> Self {
        Self {
            stop_words,
            table: WordFrequencyMap::new(),
        }
    }

    /// Creates a session with stop words loaded from the conventional
    /// `stopwords.txt`, degrading to an empty set when it is missing.
    pub fn with_default_stop_words() -> Self {
        Self::new(StopWordSet::load_or_empty(DEFAULT_STOP_WORDS_PATH))
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Extracts tags from the file at `path`, replacing the previous table.
    ///
    /// The old table is discarded before reading begins. On a mid-read
    /// failure the counts accumulated up to the failing line are kept, so
    /// the session remains usable alongside the returned error.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        self.table = WordFrequencyMap::new();

        let file = File::open(path).map_err(|e| Error::input_read(path, e))?;
        let mut counter = FrequencyCounter::new(&self.stop_words);
        let outcome = counter.ingest(BufReader::new(file));
        self.table = counter.into_table();

        outcome.map_err(|e| Error::input_read(path, e))?;

        info!(
            "extracted {} distinct tags from {}",
            self.table.len(),
            path.display()
        );
        Ok(())
    }

    /// True once a file has been opened and produced at least one tag.
    pub fn is_loaded(&self) -> bool {
        !self.table.is_empty()
    }

    /// Number of distinct tags in the current table.
    pub fn tag_count(&self) -> usize {
        self.table.len()
    }

    pub fn table(&self) -> &WordFrequencyMap {
        &self.table
    }

    /// The current table ranked by descending frequency. Freshly computed on
    /// each call, so it always reflects the table's current contents.
    pub fn ranked_tags(&self) -> Vec<RankedTag> {
        rank_frequencies(&self.table)
    }

    /// Display rendering of the current table, one `word (count)` line per
    /// tag, most frequent first.
    pub fn display(&self) -> String {
        render_display(&self.ranked_tags())
    }

    /// Writes the `word count` rendering of the current table to `path`,
    /// truncating any existing file.
    pub fn save_tags(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        persist_tags(&self.ranked_tags(), path)
    }
}
