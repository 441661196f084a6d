//! Initialization module for new verstamp projects.
//!
//! This module writes a commented `verstamp.toml` into a web UI project root
//! and, on request, a starter version file at the default location.
//!
//! # Example
//!
//! ```no_run
//! use vs_core::init::{generate_project, InitOptions};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("web-ui"),
//!     force: false,
//!     seed_version: true,
//! };
//!
//! let written = generate_project(options)?;
//! println!("wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_project, InitOptions};
