mod constants;
pub mod models;
pub use constants::{DEFAULT_STOP_WORDS_PATH, DEFAULT_TAGS_PATH};
pub use models::{Error, FrequencyCounter, StopWordSet, TagExtractor, Tokenizer};
pub mod types;
mod utils;
pub use types::{RankedTag, Token, Word, WordFrequency, WordFrequencyMap};
pub use utils::{persist_tags, rank_frequencies, render_display, render_tags};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Extracts a word-frequency table from in-memory text, filtering against
/// `stop_words`. Never fails; an input with no countable words yields an
/// empty table.
pub fn extract_tags_from_text(text: &str, stop_words: &StopWordSet) -> WordFrequencyMap {
    let mut counter = FrequencyCounter::new(stop_words);
    counter.consume_text(text);
    counter.into_table()
}

/// Extracts a word-frequency table from the file at `path`, filtering
/// against `stop_words`.
///
/// A missing file or mid-read failure yields [`Error::InputReadError`] and
/// discards any partial counts. Callers that want to keep partial results
/// across a failed read should drive a [`FrequencyCounter`] or a
/// [`TagExtractor`] session directly.
pub fn extract_tags_from_file(
    path: impl AsRef<Path>,
    stop_words: &StopWordSet,
) -> Result<WordFrequencyMap, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::input_read(path, e))?;

    let mut counter = FrequencyCounter::new(stop_words);
    counter
        .ingest(BufReader::new(file))
        .map_err(|e| Error::input_read(path, e))?;

    Ok(counter.into_table())
}
