//! Common test utilities shared by the integration tests.
//!
//! This module provides on-disk project layouts mirroring a real web UI
//! checkout: a release `VERSION` file next to the `web-ui/` project root.

pub mod fixtures;

pub use fixtures::*;
