use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a normalized word as an owned `String`. Words produced by the tokenizer are
/// non-empty, lowercase, and contain only ASCII letters.
pub type Word = String;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts within a text document.
/// The key is the `Word`, and the value is the `WordFrequency`. A fresh map is
/// produced per extraction run.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;

/// A `(Word, WordFrequency)` pair produced by ranking a `WordFrequencyMap` by
/// descending frequency.
pub type RankedTag = (Word, WordFrequency);
