//! # vs-core
//!
//! Version derivation and build plan resolution for verstamp.
//!
//! This crate provides:
//! - Derivation of a dotted version string from a `KEY=VALUE` version file
//! - Settings loading from `verstamp.toml`
//! - Build plan resolution (version, paths, bundler environment)
//! - Bundler execution with the derived environment applied
//! - Project initialization from embedded templates
//!
//! ## Modules
//!
//! - [`version`]: Version file parsing and derivation
//! - [`config`]: Settings loading and validation
//! - [`plan`]: Build plan resolution
//! - [`runner`]: Bundler subprocess execution
//! - [`init`]: `verstamp.toml` generation

pub mod config;
pub mod init;
pub mod plan;
pub mod runner;
pub mod version;
