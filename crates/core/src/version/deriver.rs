//! Version file parsing and positional derivation.
//!
//! The version string is built from the values of the first three lines of
//! the version file, whatever their keys are called:
//!
//! ```text
//! major=0        ─┐
//! minor=5         ├─> "0.5.1"
//! patch=1        ─┘
//! quality=beta   (ignored)
//! ```

use crate::version::error::VersionError;
use crate::version::error::VersionResult;
use std::path::Path;
use tracing::debug;
use tracing::warn;
use vs_protocol::config_models::MalformedLinePolicy;
use vs_protocol::version_models::VersionFile;
use vs_protocol::version_models::VersionLine;
use vs_protocol::version_models::VersionString;

/// Number of leading lines that make up a version string.
pub const VERSION_SEGMENTS: usize = 3;

/// Splits version file content into `KEY=VALUE` lines.
///
/// Lines end at `\n` with an optional preceding `\r`. A terminator at the very
/// end of the content does not open another line. Each line is split on its
/// first `=`; a line without `=` keeps the whole text as key and has no value.
pub fn parse_version_file(content: &str) -> VersionFile {
    let lines = content
        .lines()
        .map(|line| match line.split_once('=') {
            Some((key, value)) => VersionLine {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => VersionLine {
                key: line.to_string(),
                value: None,
            },
        })
        .collect();

    VersionFile { lines }
}

/// Extension for deriving the dotted version from a parsed [`VersionFile`].
pub trait DerivedVersion {
    /// Joins the values of the first three lines with `.`.
    ///
    /// # Errors
    ///
    /// - [`VersionError::TooFewLines`] if the file has fewer than three lines
    /// - [`VersionError::MalformedLine`] if one of the first three lines has
    ///   no `=` and `policy` is [`MalformedLinePolicy::Strict`]
    fn derive(&self, policy: MalformedLinePolicy) -> VersionResult<VersionString>;
}

impl DerivedVersion for VersionFile {
    fn derive(&self, policy: MalformedLinePolicy) -> VersionResult<VersionString> {
        let mut segments = Vec::with_capacity(VERSION_SEGMENTS);

        for index in 0..VERSION_SEGMENTS {
            let line = self.lines.get(index).ok_or(VersionError::TooFewLines {
                found: self.lines.len(),
            })?;

            if line.value.is_none() {
                match policy {
                    MalformedLinePolicy::Strict => {
                        return Err(VersionError::MalformedLine {
                            line: index + 1,
                            content: line.key.clone(),
                        });
                    }
                    MalformedLinePolicy::Lenient => {
                        warn!(line = index + 1, "version file line has no '=', using empty segment");
                    }
                }
            }

            segments.push(line.value_or_empty());
        }

        Ok(VersionString::new(segments.join(".")))
    }
}

/// Derives a version string from version file content.
pub fn derive_from_str(content: &str, policy: MalformedLinePolicy) -> VersionResult<VersionString> {
    parse_version_file(content).derive(policy)
}

/// Reads the version file at `path` and derives its version string.
///
/// The file is read on every call; nothing is cached.
///
/// # Errors
///
/// Returns [`VersionError::FileRead`] if the file cannot be read, plus the
/// errors of [`DerivedVersion::derive`].
///
/// # Example
///
/// ```rust,no_run
/// use vs_core::version::derive_version;
/// use vs_protocol::MalformedLinePolicy;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let version = derive_version(Path::new("../VERSION"), MalformedLinePolicy::Lenient)?;
/// println!("building {version}");
/// # Ok(())
/// # }
/// ```
pub fn derive_version(path: &Path, policy: MalformedLinePolicy) -> VersionResult<VersionString> {
    debug!(path = %path.display(), "reading version file");

    let content = std::fs::read_to_string(path).map_err(|source| VersionError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let version = derive_from_str(&content, policy)?;
    debug!(%version, "derived version");

    Ok(version)
}
