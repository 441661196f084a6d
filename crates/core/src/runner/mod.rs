//! Frontend bundler execution.
//!
//! This module runs the bundler named in the project settings with the build
//! plan's environment applied, forwarding its output to the log.

pub mod bundler;
pub mod error;

pub use bundler::{BundlerReport, BundlerRunner};
pub use error::{RunError, RunResult};
