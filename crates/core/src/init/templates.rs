//! Embedded template files for project initialization.
//!
//! This module uses `rust-embed` to embed the files of the workspace root
//! `templates/` directory into the binary at compile time:
//! - `CARGO_MANIFEST_DIR` = `crates/core`
//! - `../../templates` = workspace root `templates/`
//!
//! With the `debug-embed` feature, debug builds embed the files as well, so
//! tests see exactly what a release binary ships.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Template for the project settings file.
pub const SETTINGS_TEMPLATE: &str = "verstamp.toml";

/// Template for a starter version file.
pub const VERSION_TEMPLATE: &str = "VERSION";

/// Get template file content by path.
///
/// # Example
/// ```
/// use vs_core::init::templates::get_template;
///
/// let settings = get_template("verstamp.toml").expect("verstamp.toml should exist");
/// assert!(settings.contains("version-env ="));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
