//! Loaded project configuration.
//!
//! This module pairs the raw [`ProjectSettings`] with the project root they
//! belong to, so relative paths in the settings can be resolved.

use std::path::Path;
use std::path::PathBuf;
use vs_protocol::config_models::ProjectSettings;

/// Settings for one web UI project, anchored at its root directory.
///
/// # Example
///
/// ```rust,no_run
/// use vs_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("web-ui"))?;
/// println!("version file: {}", config.version_file_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Directory the bundler runs in and relative paths start from.
    pub root: PathBuf,

    /// Settings file the values came from, `None` when defaults were used.
    pub source: Option<PathBuf>,

    /// The settings themselves.
    pub settings: ProjectSettings,
}

impl ProjectConfig {
    /// Configuration with default settings for `root`.
    pub fn with_defaults(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            source: None,
            settings: ProjectSettings::default(),
        }
    }

    /// Path of the version file, joined onto the root.
    pub fn version_file_path(&self) -> PathBuf {
        self.root.join(&self.settings.version_file)
    }

    /// Bundler output directory, joined onto the root.
    pub fn output_dir_path(&self) -> PathBuf {
        self.root.join(&self.settings.output_dir)
    }
}
