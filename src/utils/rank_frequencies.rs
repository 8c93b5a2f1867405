use crate::types::{RankedTag, WordFrequencyMap};

/// Ranks a mapping of words to their frequencies.
///
/// This function takes a `WordFrequencyMap`, which is a mapping of words to
/// their occurrence counts, and returns a sorted vector of
/// `(Word, WordFrequency)` pairs.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Parameters:
/// - `table`: A `WordFrequencyMap`, where the key is a `Word` and the value
///   is its `WordFrequency` (how often it appeared).
///
/// ### Returns:
/// - A `Vec` of `(Word, WordFrequency)` tuples, sorted as described above.
///   The result is freshly computed on each call and its length equals the
///   number of distinct words in the table.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use tag_extractor::rank_frequencies;
/// use tag_extractor::types::WordFrequencyMap;
///
/// let mut table: WordFrequencyMap = HashMap::new();
/// table.insert("cat".to_string(), 2);
/// table.insert("sat".to_string(), 1);
/// table.insert("mat".to_string(), 1);
///
/// let ranked = rank_frequencies(&table);
/// assert_eq!(ranked, vec![
///     ("cat".to_string(), 2),
///     ("mat".to_string(), 1),
///     ("sat".to_string(), 1)
/// ]);
/// ```
pub fn rank_frequencies(table: &WordFrequencyMap) -> Vec<RankedTag> {
    // Convert the HashMap into a Vec and sort it by frequency (descending),
    // then by word (ascending) for deterministic order.
    let mut ranked: Vec<RankedTag> = table
        .iter()
        .map(|(word, frequency)| (word.to_owned(), frequency.to_owned()))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    ranked
}
