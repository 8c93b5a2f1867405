use std::io::{self, BufRead};

use crate::models::{StopWordSet, Tokenizer};
use crate::types::{TokenRef, WordFrequencyMap};

/// Accumulates word frequencies for a single extraction run.
///
/// Tokens matching the stop-word set are skipped; every other token is
/// inserted at a count of 1 on first sight and incremented thereafter. The
/// counter owns its table, so a mid-read failure in [`FrequencyCounter::ingest`]
/// leaves whatever partial counts existed before the failing line available to
/// the caller.
pub struct FrequencyCounter<'a> {
    tokenizer: Tokenizer,
    stop_words: &'a StopWordSet,
    table: WordFrequencyMap,
}

impl<'a> FrequencyCounter<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stop_words,
            table: WordFrequencyMap::new(),
        }
    }

    /// Tokenizes `text` and counts every non-stop-word token.
    pub fn consume_text(&mut self, text: &str) {
        for token in self.tokenizer.tokenize(text) {
            self.count_token(&token);
        }
    }

    /// Reads `reader` line by line, counting as it goes. On an I/O failure
    /// the error is returned and the table retains the counts accumulated
    /// from the lines read so far; the caller decides whether partial
    /// results are acceptable.
    pub fn ingest<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.consume_text(&line);
        }

        Ok(())
    }

    fn count_token(&mut self, token: &TokenRef) {
        if self.stop_words.contains(token) {
            return;
        }

        *self.table.entry(token.to_string()).or_insert(0) += 1;
    }

    pub fn table(&self) -> &WordFrequencyMap {
        &self.table
    }

    /// Consumes the counter, yielding the accumulated table.
    pub fn into_table(self) -> WordFrequencyMap {
        self.table
    }
}
