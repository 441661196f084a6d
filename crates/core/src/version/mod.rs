//! Version string derivation.
//!
//! This module reads the `KEY=VALUE` version file maintained by the release
//! process and turns its first three values into a dotted version string.

pub mod deriver;
pub mod error;

pub use deriver::{derive_from_str, derive_version, parse_version_file, DerivedVersion, VERSION_SEGMENTS};
pub use error::{VersionError, VersionResult};
