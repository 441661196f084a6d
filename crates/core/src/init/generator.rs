//! File generation for `verstamp init`.

use super::error::{InitError, InitResult};
use super::templates::{get_template, SETTINGS_TEMPLATE, VERSION_TEMPLATE};
use crate::config::loader::SETTINGS_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use vs_protocol::config_models::DEFAULT_VERSION_FILE;

/// Options for initializing a web UI project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Web UI project root where `verstamp.toml` will be created.
    pub target_dir: PathBuf,

    /// Overwrite an existing `verstamp.toml`.
    pub force: bool,

    /// Also write a starter version file at the default location if none
    /// exists yet.
    pub seed_version: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            seed_version: false,
        }
    }
}

/// Write `verstamp.toml` (and optionally a starter version file).
///
/// ```text
/// <target_dir>/../VERSION       (seed_version, only if missing)
/// <target_dir>/verstamp.toml
/// ```
///
/// # Returns
/// The paths written, or an `InitError` if:
/// - `verstamp.toml` already exists (without force flag)
/// - A template file cannot be found
/// - File system operations fail
///
/// An existing version file is never overwritten, even with `force`.
pub fn generate_project(options: InitOptions) -> InitResult<Vec<PathBuf>> {
    let settings_path = options.target_dir.join(SETTINGS_FILE_NAME);

    if settings_path.exists() && !options.force {
        return Err(InitError::ConfigExists(settings_path));
    }

    let mut written = Vec::new();

    write_template_file(&settings_path, SETTINGS_TEMPLATE)?;
    written.push(settings_path);

    if options.seed_version {
        let version_path = options.target_dir.join(DEFAULT_VERSION_FILE);
        if version_path.exists() {
            info!(path = %version_path.display(), "version file exists, leaving it alone");
        } else {
            write_template_file(&version_path, VERSION_TEMPLATE)?;
            written.push(version_path);
        }
    }

    Ok(written)
}

/// Writes the embedded template `template_path` to `target_path`.
fn write_template_file(target_path: &Path, template_path: &str) -> InitResult<()> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    // Ensure parent directory exists
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.to_path_buf(),
        source,
    })?;

    info!(path = %target_path.display(), "wrote {template_path}");
    Ok(())
}
