use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// I/O failures surfaced at component boundaries. None of these should
/// terminate an interactive caller; each carries the path involved plus the
/// underlying `io::Error`.
#[derive(Debug)]
pub enum Error {
    /// The stop-word file could not be read. Callers degrade to an empty
    /// stop-word set and continue.
    ConfigLoadError { path: PathBuf, source: io::Error },
    /// The source document could not be opened or failed mid-read. The
    /// current extraction is aborted; any partially accumulated table is
    /// left to the caller's discretion.
    InputReadError { path: PathBuf, source: io::Error },
    /// The tags destination could not be opened or written. Non-fatal; a
    /// half-written file is not cleaned up.
    OutputWriteError { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn config_load(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::ConfigLoadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn input_read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::InputReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn output_write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::OutputWriteError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigLoadError { path, source } => {
                write!(
                    f,
                    "Config Load Error: could not read stop words from {}: {}",
                    path.display(),
                    source
                )
            }
            Error::InputReadError { path, source } => {
                write!(
                    f,
                    "Input Read Error: could not read {}: {}",
                    path.display(),
                    source
                )
            }
            Error::OutputWriteError { path, source } => {
                write!(
                    f,
                    "Output Write Error: could not write {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ConfigLoadError { source, .. }
            | Error::InputReadError { source, .. }
            | Error::OutputWriteError { source, .. } => Some(source),
        }
    }
}
