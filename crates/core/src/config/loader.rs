//! Settings file loader for `verstamp.toml`.
//!
//! The settings file lives in the web UI project root, next to the bundler's
//! own configuration. It is optional: without it every setting takes its
//! default.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::ProjectConfig;
use std::path::Path;
use tracing::debug;
use tracing::info;
use vs_protocol::config_models::ProjectSettings;
use vs_protocol::plan_models::OUTPUT_DIR_ENV;
use vs_protocol::plan_models::PUBLIC_PATH_ENV;

/// File name looked up in the project root.
pub const SETTINGS_FILE_NAME: &str = "verstamp.toml";

/// Loads the project configuration for `root`.
///
/// # Arguments
///
/// * `root` - Web UI project root that may contain `verstamp.toml`
///
/// # Returns
///
/// A `ProjectConfig` anchored at `root`. If `verstamp.toml` is missing, the
/// default settings are returned rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file exists but cannot be read
/// - The file has invalid TOML syntax
/// - A setting holds a value that cannot work (see [`validate`])
///
/// # Example
///
/// ```rust,no_run
/// use vs_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("public path: {}", config.settings.public_path);
/// # Ok(())
/// # }
/// ```
pub fn load_config(root: &Path) -> ConfigResult<ProjectConfig> {
    let config_path = root.join(SETTINGS_FILE_NAME);

    // If verstamp.toml doesn't exist, return defaults
    if !config_path.exists() {
        debug!(root = %root.display(), "no settings file, using defaults");
        return Ok(ProjectConfig::with_defaults(root));
    }

    load_config_from(root, &config_path)
}

/// Loads the project configuration for `root` from an explicit settings file.
///
/// Unlike [`load_config`], a missing file is an error here.
pub fn load_config_from(root: &Path, config_path: &Path) -> ConfigResult<ProjectConfig> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;

    let settings: ProjectSettings =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.to_path_buf(),
            source,
        })?;

    validate(&settings).map_err(|reason| ConfigError::InvalidConfig {
        path: config_path.to_path_buf(),
        reason,
    })?;

    info!(path = %config_path.display(), "loaded settings");

    Ok(ProjectConfig {
        root: root.to_path_buf(),
        source: Some(config_path.to_path_buf()),
        settings,
    })
}

/// Checks settings values that TOML parsing alone cannot catch.
///
/// The version variable must be usable as an environment variable name and
/// the bundler program must be named.
pub fn validate(settings: &ProjectSettings) -> Result<(), String> {
    let name = &settings.version_env;
    if name.is_empty() {
        return Err("version-env must not be empty".to_string());
    }
    if name.contains('=') || name.contains('\0') {
        return Err(format!("version-env {name:?} is not a valid variable name"));
    }
    if name == PUBLIC_PATH_ENV || name == OUTPUT_DIR_ENV {
        return Err(format!("version-env {name:?} is reserved for the build paths"));
    }
    if settings.version_file.is_empty() {
        return Err("version-file must not be empty".to_string());
    }
    if settings.bundler.program.trim().is_empty() {
        return Err("bundler.program must not be empty".to_string());
    }
    Ok(())
}
