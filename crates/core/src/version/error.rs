//! Error types for version derivation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while deriving a version string.
#[derive(Error, Debug)]
pub enum VersionError {
    /// Failed to read the version file from disk.
    #[error("Failed to read version file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The version file has fewer than the three lines a version needs.
    #[error("Version file needs at least 3 lines, found {found}")]
    TooFewLines { found: usize },

    /// A line without `=` was found while the strict policy is active.
    #[error("Version file line {line} has no '=': {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Type alias for Result with VersionError.
pub type VersionResult<T> = Result<T, VersionError>;
