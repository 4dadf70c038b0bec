//! Error types for the modv CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for modv CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for modv CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Branch extraction failed (ingestion, build, or filter).
    #[error(transparent)]
    Graph(#[from] modv_graph::Error),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A persisted branch record could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested output location is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// The rejected path.
        path: PathBuf,
    },
}
