//! Integration tests for the sprout command-line surface.
//!
//! These tests verify argument parsing, the usage guide and exit codes
//! without running any scaffolding step.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// `sprout` running in an empty temp directory with an isolated config path.
fn sprout(cwd: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sprout"));
    cmd.current_dir(cwd.path())
        .env("NO_COLOR", "1")
        .env("SPROUT_CONFIG", cwd.path().join("no-such-config.yaml"))
        .env_remove("SPROUT_TEMPLATE")
        .env_remove("SPROUT_PACKAGE_MANAGER");
    cmd
}

fn entries(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path()).expect("read_dir").count()
}

// --- Missing directory argument ---

#[test]
#[serial]
fn test_no_args_prints_guide_and_exits_one() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify the project directory"))
        .stdout(predicate::str::contains("sprout <project-directory>"))
        .stdout(predicate::str::contains("sprout my-app"))
        .stdout(predicate::str::contains("sprout --help"));
}

#[test]
#[serial]
fn test_no_args_creates_nothing() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd).assert().code(1);
    assert_eq!(entries(&cwd), 0);
}

#[test]
#[serial]
fn test_blank_directory_is_treated_as_missing() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .arg("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please specify the project directory"));
    assert_eq!(entries(&cwd), 0);
}

#[test]
#[serial]
fn test_quiet_still_prints_guide() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("sprout <project-directory>"));
}

#[test]
#[serial]
fn test_no_color_env_values_never_break_argument_parsing() {
    for value in ["1", "0", "yes", "true", ""] {
        let cwd = TempDir::new().expect("tempdir");
        sprout(&cwd)
            .env("NO_COLOR", value)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Please specify the project directory"))
            .stdout(predicate::str::contains("sprout <project-directory>"));
    }
}

#[test]
#[serial]
fn test_no_color_env_keeps_output_plain() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\x1b[").not());
}

// --- Help and version ---

#[test]
#[serial]
fn test_help_flag_shows_usage_and_footer() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sprout <project-directory>"))
        .stdout(predicate::str::contains("Only <project-directory> is required."));
}

#[test]
#[serial]
fn test_help_lists_options() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--package-manager"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
#[serial]
fn test_version_flag_shows_version() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "sprout ",
            env!("CARGO_PKG_VERSION")
        )));
}

// --- Argument errors ---

#[test]
#[serial]
fn test_unknown_flag_is_usage_error() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .args(["my-app", "--frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));
    assert_eq!(entries(&cwd), 0);
}

#[test]
#[serial]
fn test_invalid_package_manager_lists_valid_values() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .args(["my-app", "--package-manager", "bun"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("npm, yarn, pnpm"));
    assert_eq!(entries(&cwd), 0);
}

#[test]
#[serial]
fn test_option_shaped_template_is_rejected_before_cloning() {
    let cwd = TempDir::new().expect("tempdir");
    sprout(&cwd)
        .args(["my-app", "--template=--upload-pack=touch pwned"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid --template"));
    assert_eq!(entries(&cwd), 0);
}

// --- Configuration file ---

#[test]
#[serial]
fn test_malformed_config_file_aborts_with_exit_one() {
    let cwd = TempDir::new().expect("tempdir");
    let config = cwd.path().join("config.yaml");
    std::fs::write(&config, "package_manager: [1, 2]\n").expect("write config");
    sprout(&cwd)
        .arg("my-app")
        .env("SPROUT_CONFIG", &config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse"));
    assert!(!cwd.path().join("my-app").exists());
}
