//! Errors raised while loading content

use std::path::PathBuf;
use thiserror::Error;

/// Content loading errors
///
/// Anything here aborts the whole load; soft problems (bad front-matter,
/// unmatched file names) degrade with a warning instead.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("No date for {0:?}: add `date` to its front-matter or put YYYY.MM.DD in a TIL file name")]
    MissingDate(PathBuf),
}
