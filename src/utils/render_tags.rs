use std::fmt::Write;

use crate::types::RankedTag;

/// Formats ranked tags for on-screen display, one `word (count)` line per
/// entry, most frequent first.
pub fn render_display(tags: &[RankedTag]) -> String {
    let mut out = String::new();
    for (word, frequency) in tags {
        // Infallible for String targets.
        let _ = writeln!(out, "{} ({})", word, frequency);
    }
    out
}

/// Formats ranked tags for file persistence, one `word count` line per
/// entry, most frequent first. This format intentionally differs from the
/// display rendering.
pub fn render_tags(tags: &[RankedTag]) -> String {
    let mut out = String::new();
    for (word, frequency) in tags {
        let _ = writeln!(out, "{} {}", word, frequency);
    }
    out
}
