//! Error types for bundler execution.

use thiserror::Error;

/// Errors that can occur while running the bundler.
#[derive(Error, Debug)]
pub enum RunError {
    /// The bundler program could not be found on `PATH`.
    #[error("Bundler program '{program}' not found: {source}")]
    ProgramNotFound {
        program: String,
        source: which::Error,
    },

    /// The bundler process could not be started.
    #[error("Failed to spawn command '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// An output pipe of the bundler process was not available.
    #[error("Failed to capture {0} of bundler")]
    MissingPipe(&'static str),

    /// Waiting for the bundler process failed.
    #[error("Failed to wait for '{program}': {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },

    /// The bundler exited unsuccessfully.
    #[error("Bundler '{program}' failed: {status}")]
    Failed {
        program: String,
        status: String,
        code: Option<i32>,
    },
}

/// Type alias for Result with RunError.
pub type RunResult<T> = Result<T, RunError>;
