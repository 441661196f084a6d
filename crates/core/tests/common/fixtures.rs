//! Test fixtures for creating sample projects.

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary checkout with `VERSION` and a `web-ui/` project root.
///
/// The `TempDir` must be kept alive for the test duration.
pub struct TestProject {
    pub dir: TempDir,
    pub ui: PathBuf,
}

impl TestProject {
    pub fn version_path(&self) -> PathBuf {
        self.dir.path().join("VERSION")
    }

    /// Writes `web-ui/verstamp.toml`.
    #[allow(dead_code)]
    pub fn write_settings(&self, content: &str) -> std::io::Result<()> {
        std::fs::write(self.ui.join("verstamp.toml"), content)
    }
}

/// Create a temporary project whose version file holds `version`.
pub fn create_test_project(version: &str) -> std::io::Result<TestProject> {
    let dir = tempfile::tempdir()?;
    let ui = dir.path().join("web-ui");

    std::fs::create_dir_all(&ui)?;
    std::fs::write(dir.path().join("VERSION"), version)?;

    Ok(TestProject { dir, ui })
}

/// A release version file as the release process writes it.
pub const RELEASE_VERSION_FILE: &str = "major=0\nminor=5\npatch=1\nquality=beta\nbuild_no=12\n";
