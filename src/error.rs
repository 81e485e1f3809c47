//! The error taxonomy of the core pipeline.
//!
//! Every failure crossing the library boundary is one of three typed
//! values; the binary decides how to present them. Nothing in the core
//! degrades silently: an unreadable or undecodable input is an error
//! here, never an empty result.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A shorthand for results carrying [`UrlDiffError`].
pub type Result<T> = std::result::Result<T, UrlDiffError>;

/// Failures surfaced by the core pipeline.
#[derive(Error, Debug)]
pub enum UrlDiffError {
    /// The underlying filesystem read or write failed.
    #[error("can't {action} file {}: {source}", path.display())]
    Io {
        /// `"read"` or `"write"`, for the user-facing message.
        action: &'static str,
        /// The file the failed operation was addressing.
        path: PathBuf,
        /// The propagated filesystem error.
        #[source]
        source: io::Error,
    },

    /// The input has no header row, can't be decoded under the
    /// detected encoding, or isn't parseable as delimited text.
    #[error("malformed input in {}: {reason}", path.display())]
    MalformedInput {
        /// The offending input file.
        path: PathBuf,
        /// What exactly was wrong with it.
        reason: String,
    },

    /// A requested column name is not in the file's header row.
    ///
    /// Extraction itself never raises this (a missing column extracts
    /// to an empty set), but callers that would rather fail fast get it
    /// from [`Table::require_column`](crate::table::Table::require_column).
    #[error("no column named {column:?} in {} (available: {})", path.display(), available.join(", "))]
    MissingColumn {
        /// The column name that was asked for.
        column: String,
        /// The file whose header was searched.
        path: PathBuf,
        /// The column names the header actually carries, in order.
        available: Vec<String>,
    },
}

impl UrlDiffError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        UrlDiffError::Io { action: "read", path: path.to_owned(), source }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        UrlDiffError::Io { action: "write", path: path.to_owned(), source }
    }
}
