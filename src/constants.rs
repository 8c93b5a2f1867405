/// Conventional stop-word file looked up in the working directory when no
/// explicit path is given.
pub const DEFAULT_STOP_WORDS_PATH: &str = "stopwords.txt";

/// Conventional output file for persisted tags.
pub const DEFAULT_TAGS_PATH: &str = "tags.txt";
