pub mod error;
pub use error::Error;

pub mod stop_words;
pub use stop_words::StopWordSet;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod frequency_counter;
pub use frequency_counter::FrequencyCounter;

pub mod tag_extractor;
pub use tag_extractor::TagExtractor;
