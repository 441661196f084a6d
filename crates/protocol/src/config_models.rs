//! Project settings models for `verstamp.toml`.
//!
//! This module defines the structure of the settings file that sits in the web
//! UI project root and tells verstamp where the version file lives, which
//! variable receives the derived version, and how the bundler is invoked.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// Default location of the version file, relative to the project root.
pub const DEFAULT_VERSION_FILE: &str = "../VERSION";

/// Default environment variable that receives the derived version.
pub const DEFAULT_VERSION_ENV: &str = "VUE_APP_VERSION";

/// Default URL path prefix under which the built assets are served.
pub const DEFAULT_PUBLIC_PATH: &str = "/s/";

/// Default directory the bundler writes artifacts into, relative to the
/// project root.
pub const DEFAULT_OUTPUT_DIR: &str = "../internal/webui";

/// What to do with a version file line that has no `=`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Treat the value as empty, producing an empty version segment.
    #[default]
    Lenient,

    /// Reject the line.
    Strict,
}

impl MalformedLinePolicy {
    /// Maps the `strict` flag used in settings and on the command line.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// How the frontend bundler is launched by `verstamp build`.
///
/// # Example
///
/// ```toml
/// [bundler]
/// program = "npm"
/// args = ["run", "build"]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(default)]
pub struct BundlerSettings {
    /// Program to run, looked up on `PATH`.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl Default for BundlerSettings {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            args: vec!["run".to_string(), "build".to_string()],
        }
    }
}

/// Represents the settings from `verstamp.toml`.
///
/// Every key is optional. A missing key (or a missing file) falls back to the
/// defaults of the web UI this tool was written for.
///
/// # Example
///
/// ```toml
/// # web-ui/verstamp.toml
/// version-file = "../VERSION"
/// version-env = "VUE_APP_VERSION"
/// public-path = "/s/"
/// output-dir = "../internal/webui"
/// strict = false
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectSettings {
    /// Path of the `KEY=VALUE` version file, relative to the project root.
    pub version_file: String,

    /// Name of the environment variable that receives the derived version.
    pub version_env: String,

    /// URL path prefix under which built assets are served.
    pub public_path: String,

    /// Directory the bundler writes artifacts into, relative to the project
    /// root.
    pub output_dir: String,

    /// Reject version file lines without `=` instead of producing an empty
    /// segment.
    pub strict: bool,

    /// Bundler invocation used by `verstamp build`.
    pub bundler: BundlerSettings,
}

impl ProjectSettings {
    pub fn line_policy(&self) -> MalformedLinePolicy {
        MalformedLinePolicy::from_strict(self.strict)
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            version_file: DEFAULT_VERSION_FILE.to_string(),
            version_env: DEFAULT_VERSION_ENV.to_string(),
            public_path: DEFAULT_PUBLIC_PATH.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            strict: false,
            bundler: BundlerSettings::default(),
        }
    }
}
