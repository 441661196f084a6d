//! Resolved build plan.
//!
//! A build plan is what the frontend bundler needs from verstamp: the derived
//! version, the static build settings, and the environment the bundler must
//! run with. It only lives for the duration of one build.

use crate::version_models::VersionString;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

/// Variable that hands the public path to the bundler.
pub const PUBLIC_PATH_ENV: &str = "VERSTAMP_PUBLIC_PATH";

/// Variable that hands the resolved output directory to the bundler.
pub const OUTPUT_DIR_ENV: &str = "VERSTAMP_OUTPUT_DIR";

/// Everything resolved for a single bundler invocation.
///
/// # Example
///
/// ```json
/// {
///   "root": "/home/me/gamcro/web-ui",
///   "version": "0.5.1",
///   "public-path": "/s/",
///   "output-dir": "/home/me/gamcro/web-ui/../internal/webui",
///   "env": {
///     "VERSTAMP_OUTPUT_DIR": "/home/me/gamcro/web-ui/../internal/webui",
///     "VERSTAMP_PUBLIC_PATH": "/s/",
///     "VUE_APP_VERSION": "0.5.1"
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
pub struct BuildPlan {
    /// Project root the bundler runs in.
    pub root: String,

    /// Version derived from the version file.
    pub version: VersionString,

    /// URL path prefix under which built assets are served.
    pub public_path: String,

    /// Directory the bundler writes artifacts into, joined onto `root`.
    pub output_dir: String,

    /// Environment applied to the bundler process: the version under the
    /// configured name, plus [`PUBLIC_PATH_ENV`] and [`OUTPUT_DIR_ENV`].
    pub env: BTreeMap<String, String>,
}
