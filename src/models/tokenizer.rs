use crate::types::Token;

/// Splits raw text into normalized word tokens.
///
/// Normalization is lossy by design: digits, punctuation, and non-ASCII
/// letters are removed entirely, not transliterated.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Splits on runs of whitespace, lowercases each raw token, then strips
    /// every character that is not an ASCII letter. Tokens that become empty
    /// after stripping produce nothing. The returned iterator is lazy and
    /// finite; tokenization itself never fails.
    pub fn tokenize<'a>(self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        text.split_whitespace().filter_map(|word| {
            let cleaned: String = word
                .chars()
                .flat_map(|c| c.to_lowercase())
                .filter(|c| c.is_ascii_lowercase())
                .collect();

            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned)
            }
        })
    }
}
