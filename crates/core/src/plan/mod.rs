//! Build plan resolution.
//!
//! Resolving a plan is the build-configuration step: it runs once, before the
//! bundler starts, and either produces everything the bundler needs or fails
//! the build.
//!
//! # Example
//!
//! ```rust,no_run
//! use vs_core::plan::load_plan;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = load_plan(Path::new("web-ui"), None, false)?;
//! for (name, value) in &plan.env {
//!     println!("{name}={value}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::{PlanError, PlanResult};

use crate::config::error::ConfigResult;
use crate::config::loader::load_config;
use crate::config::loader::load_config_from;
use crate::config::models::ProjectConfig;
use crate::version::deriver::derive_version;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;
use vs_protocol::plan_models::BuildPlan;
use vs_protocol::plan_models::OUTPUT_DIR_ENV;
use vs_protocol::plan_models::PUBLIC_PATH_ENV;

/// Derives the version and assembles the build plan for `config`.
pub fn resolve_plan(config: &ProjectConfig) -> PlanResult<BuildPlan> {
    let settings = &config.settings;
    let version = derive_version(&config.version_file_path(), settings.line_policy())?;

    let output_dir = config.output_dir_path().display().to_string();

    let mut env = BTreeMap::new();
    env.insert(settings.version_env.clone(), version.to_string());
    env.insert(PUBLIC_PATH_ENV.to_string(), settings.public_path.clone());
    env.insert(OUTPUT_DIR_ENV.to_string(), output_dir.clone());

    info!(%version, env = %settings.version_env, %output_dir, "resolved build plan");

    Ok(BuildPlan {
        root: config.root.display().to_string(),
        version,
        public_path: settings.public_path.clone(),
        output_dir,
        env,
    })
}

/// Loads the settings for `root`, applying command-line overrides.
///
/// `config_path` selects an explicit settings file; `strict` forces the strict
/// line policy regardless of the settings.
pub fn load_project(root: &Path, config_path: Option<&Path>, strict: bool) -> ConfigResult<ProjectConfig> {
    let mut config = match config_path {
        Some(path) => load_config_from(root, path)?,
        None => load_config(root)?,
    };
    if strict {
        config.settings.strict = true;
    }
    Ok(config)
}

/// Loads the settings for `root` and resolves the plan in one step.
pub fn load_plan(root: &Path, config_path: Option<&Path>, strict: bool) -> PlanResult<BuildPlan> {
    resolve_plan(&load_project(root, config_path, strict)?)
}
