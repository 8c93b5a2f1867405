use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Error;
use crate::types::RankedTag;
use crate::utils::render_tags;

/// Writes ranked tags to `path` in the `word count` line format, truncating
/// any existing file.
///
/// Failure yields [`Error::OutputWriteError`] and is non-fatal for the
/// caller; no cleanup of a half-written file is attempted.
pub fn persist_tags(tags: &[RankedTag], path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::output_write(path, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(render_tags(tags).as_bytes())
        .map_err(|e| Error::output_write(path, e))?;
    writer.flush().map_err(|e| Error::output_write(path, e))
}
