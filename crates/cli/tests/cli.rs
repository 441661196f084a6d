//! End-to-end tests for the `verstamp` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates `<tmp>/VERSION` and an empty `<tmp>/web-ui/` project root.
fn project(version: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let ui = dir.path().join("web-ui");
    fs::create_dir_all(&ui).unwrap();
    fs::write(dir.path().join("VERSION"), version).unwrap();
    (dir, ui)
}

fn verstamp(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_verstamp"));
    cmd.env_remove("RUST_LOG").arg("--root").arg(root);
    cmd
}

#[test]
fn test_version_prints_dotted_version() {
    let (_dir, ui) = project("major=0\nminor=5\npatch=1\nquality=beta\n");

    verstamp(&ui).arg("version").assert().success().stdout("0.5.1\n");
}

#[test]
fn test_version_tag() {
    let (_dir, ui) = project("major=0\nminor=5\npatch=1\n");

    verstamp(&ui).args(["version", "--tag"]).assert().success().stdout("v0.5.1\n");
}

#[test]
fn test_crlf_version_file() {
    let (_dir, ui) = project("A=1\r\nB=2\r\nC=3\r\n");

    verstamp(&ui).arg("version").assert().success().stdout("1.2.3\n");
}

#[test]
fn test_env_formats() {
    let (_dir, ui) = project("X=10\nY=0\nZ=5\n");

    verstamp(&ui)
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("VUE_APP_VERSION=10.0.5\n"))
        .stdout(predicate::str::contains("VERSTAMP_PUBLIC_PATH=/s/\n"));

    verstamp(&ui)
        .args(["env", "--format", "shell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export VUE_APP_VERSION='10.0.5'\n"))
        .stdout(predicate::str::contains("export VERSTAMP_PUBLIC_PATH='/s/'\n"));

    verstamp(&ui)
        .args(["env", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""VUE_APP_VERSION": "10.0.5""#));
}

#[test]
fn test_plan_json() {
    let (_dir, ui) = project("major=2\nminor=0\npatch=0\n");

    let output = verstamp(&ui).arg("plan").output().unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["version"], "2.0.0");
    assert_eq!(plan["public-path"], "/s/");
    assert_eq!(plan["env"]["VUE_APP_VERSION"], "2.0.0");
    assert_eq!(plan["env"]["VERSTAMP_PUBLIC_PATH"], "/s/");
    assert!(plan["output-dir"].as_str().unwrap().ends_with("internal/webui"));
    assert_eq!(plan["env"]["VERSTAMP_OUTPUT_DIR"], plan["output-dir"]);
}

#[test]
fn test_missing_equals_is_lenient_by_default() {
    let (_dir, ui) = project("major=1\nminor\npatch=3\n");

    verstamp(&ui).arg("version").assert().success().stdout("1..3\n");
}

#[test]
fn test_strict_rejects_missing_equals() {
    let (_dir, ui) = project("major=1\nminor\npatch=3\n");

    verstamp(&ui)
        .args(["version", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2 has no '='"));
}

#[test]
fn test_strict_from_settings_file() {
    let (_dir, ui) = project("major=1\nminor\npatch=3\n");
    fs::write(ui.join("verstamp.toml"), "strict = true\n").unwrap();

    verstamp(&ui).arg("version").assert().failure();
}

#[test]
fn test_too_few_lines_fails() {
    let (_dir, ui) = project("A=1\nB=2\n");

    verstamp(&ui)
        .arg("version")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least 3 lines, found 2"));
}

#[test]
fn test_missing_version_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();

    verstamp(&root)
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read version file"));
}

#[test]
fn test_explicit_config_file() {
    let (dir, ui) = project("a=1\nb=2\nc=3\n");
    let settings = dir.path().join("release.toml");
    fs::write(&settings, "version-env = \"APP_VERSION\"\n").unwrap();

    verstamp(&ui)
        .arg("--config")
        .arg(&settings)
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("APP_VERSION=1.2.3\n"))
        .stdout(predicate::str::contains("VUE_APP_VERSION").not());
}

#[test]
fn test_init_then_refuse_overwrite() {
    let (_dir, ui) = project("a=1\nb=2\nc=3\n");

    verstamp(&ui)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("verstamp.toml"));
    assert!(ui.join("verstamp.toml").exists());

    verstamp(&ui)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    verstamp(&ui).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_seed_version_then_derive() {
    let dir = tempfile::tempdir().unwrap();
    let ui = dir.path().join("web-ui");

    verstamp(&ui).args(["init", "--seed-version"]).assert().success();
    verstamp(&ui).arg("version").assert().success().stdout("0.1.0\n");
}

#[cfg(unix)]
#[test]
fn test_build_runs_bundler_with_version() {
    let (dir, ui) = project("major=0\nminor=5\npatch=1\n");
    fs::write(
        ui.join("verstamp.toml"),
        r#"
[bundler]
program = "sh"
args = ["-c", "mkdir -p \"$VERSTAMP_OUTPUT_DIR\" && printf %s \"$VUE_APP_VERSION\" > \"$VERSTAMP_OUTPUT_DIR/version.txt\""]
"#,
    )
    .unwrap();

    verstamp(&ui)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("v0.5.1"));

    let stamped = fs::read_to_string(dir.path().join("internal/webui/version.txt")).unwrap();
    assert_eq!(stamped, "0.5.1");
}

#[cfg(unix)]
#[test]
fn test_build_passes_configured_paths() {
    let (_dir, ui) = project("major=0\nminor=5\npatch=1\n");
    fs::write(
        ui.join("verstamp.toml"),
        r#"
public-path = "/app/"
output-dir = "dist"

[bundler]
program = "sh"
args = ["-c", "mkdir -p \"$VERSTAMP_OUTPUT_DIR\" && printf %s \"$VERSTAMP_PUBLIC_PATH\" > \"$VERSTAMP_OUTPUT_DIR/public-path.txt\""]
"#,
    )
    .unwrap();

    verstamp(&ui).arg("build").assert().success();

    let public_path = fs::read_to_string(ui.join("dist/public-path.txt")).unwrap();
    assert_eq!(public_path, "/app/");
}

#[cfg(unix)]
#[test]
fn test_build_propagates_bundler_failure() {
    let (_dir, ui) = project("major=0\nminor=5\npatch=1\n");
    fs::write(
        ui.join("verstamp.toml"),
        "[bundler]\nprogram = \"sh\"\nargs = [\"-c\", \"exit 7\"]\n",
    )
    .unwrap();

    verstamp(&ui)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundler 'sh' failed"));
}
