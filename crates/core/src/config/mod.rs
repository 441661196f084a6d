//! Project settings loading.
//!
//! This module loads `verstamp.toml` from the web UI project root and resolves
//! its relative paths against that root.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, load_config_from, SETTINGS_FILE_NAME};
pub use models::ProjectConfig;
