//! Error types for build plan resolution.

use crate::config::error::ConfigError;
use crate::version::error::VersionError;
use thiserror::Error;

/// Errors that can occur while resolving a build plan.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Project settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The version could not be derived.
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Type alias for Result with PlanError.
pub type PlanResult<T> = Result<T, PlanError>;
