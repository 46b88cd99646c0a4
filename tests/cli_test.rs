//! Integration tests for CLI dispatch and the version report.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const RESOLVED_WITH_VAPOR: &str = r#"{
    "object": {
        "pins": [
            {
                "package": "vapor",
                "repositoryURL": "https://github.com/vapor/vapor.git",
                "state": { "branch": null, "revision": "def", "version": "4.0.0" }
            }
        ]
    },
    "version": 1
}"#;

#[test]
fn cli_no_args_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("toolbelt for server-side Swift"));
    Ok(())
}

#[test]
fn cli_shows_help_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("xcode"));
    Ok(())
}

#[test]
fn cli_help_does_not_list_deprecated_command() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("update").not());
    Ok(())
}

#[test]
fn cli_unknown_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.arg("bogus");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
    Ok(())
}

#[test]
fn cli_deprecated_update_shows_migration_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.arg("update");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("has been removed"))
        .stdout(predicate::str::contains("swift package update"))
        .stderr(predicate::str::contains("unrecognized subcommand").not());
    Ok(())
}

#[test]
fn cli_deprecated_update_ignores_trailing_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.args(["update", "--force", "now"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("has been removed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_version_reports_pinned_framework() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("Package.resolved"), RESOLVED_WITH_VAPOR)?;

    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.current_dir(temp.path());
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("framework: 4.0.0"))
        .stdout(predicate::str::contains("toolbox:"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_version_degrades_without_lockfile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.current_dir(temp.path());
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("framework: not found"))
        .stdout(predicate::str::contains("note:"))
        .stdout(predicate::str::contains("toolbox:"));
    Ok(())
}

#[test]
fn cli_clean_removes_build_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".build/debug"))?;

    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.current_dir(temp.path());
    cmd.arg("clean");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Project cleaned."));
    assert!(!temp.path().join(".build").exists());
    Ok(())
}

#[test]
fn cli_clean_with_nothing_to_do() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.current_dir(temp.path());
    cmd.arg("clean");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean."));
    Ok(())
}

#[test]
fn cli_new_refuses_existing_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir(temp.path().join("hello"))?;

    // No TTY in tests, so the overwrite confirmation falls back to "no".
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.current_dir(temp.path());
    cmd.args(["new", "hello"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("already exists"));
    assert!(temp.path().join("hello").exists());
    Ok(())
}

#[test]
fn cli_new_requires_a_name() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.arg("new");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_supervisor_requires_a_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.arg("supervisor");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_supervisor_init_writes_entry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("capstan"));
    cmd.current_dir(temp.path());
    cmd.args(["supervisor", "init", "--output", "app.conf"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote program entry"));
    assert!(temp.path().join("app.conf").exists());
    Ok(())
}
