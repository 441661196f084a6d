//! # vs-protocol
//!
//! Shared data models for verstamp.
//!
//! This crate defines the data structures passed between the core library and
//! the CLI:
//! - Project settings parsed from `verstamp.toml`
//! - The parsed version file and the derived version string
//! - The resolved build plan handed to the frontend bundler
//!
//! ## Modules
//!
//! - [`config_models`]: Project settings from `verstamp.toml`
//! - [`version_models`]: Version file lines and the dotted version string
//! - [`plan_models`]: Resolved build plan
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and ts-rs
//! - TypeScript generation: All types derive `TS` so the web UI can type the
//!   values it receives
//! - Independent compilation: No dependencies on other verstamp crates

pub mod config_models;
pub mod plan_models;
pub mod version_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use plan_models::*;
pub use version_models::*;
