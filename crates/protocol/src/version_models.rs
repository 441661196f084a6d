//! Version file models.
//!
//! A version file is maintained by the release process and holds one
//! `KEY=VALUE` pair per line:
//!
//! ```text
//! major=0
//! minor=5
//! patch=1
//! quality=beta
//! build_no=12
//! ```
//!
//! Only the values of the first three lines make up the dotted version
//! string. The keys are kept for lookups by name.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

/// One line of a version file, split on its first `=`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct VersionLine {
    /// Text before the first `=`, or the whole line if there is none.
    pub key: String,

    /// Text after the first `=`. `None` when the line has no `=`.
    pub value: Option<String>,
}

impl VersionLine {
    /// Value of the line, empty when the line has no `=`.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// The parsed contents of a version file, in file order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct VersionFile {
    pub lines: Vec<VersionLine>,
}

impl VersionFile {
    /// Looks up the value of the first line whose key is `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.key == key)
            .and_then(|line| line.value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A derived dotted version string such as `0.5.1`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, TS)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Release tag form, e.g. `v0.5.1`.
    pub fn tag(&self) -> String {
        format!("v{}", self.0)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VersionString> for String {
    fn from(version: VersionString) -> Self {
        version.0
    }
}
