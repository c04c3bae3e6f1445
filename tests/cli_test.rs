//! Integration tests for CLI argument parsing.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".civet.yml"), config).unwrap();
    temp
}

// No install/tools/quality entries so the suite never touches pip or the
// network.
const SIMPLE_CONFIG: &str = r#"
project: Test
files:
  - path: pyproject.toml
    label: PyProject Configuration
tests:
  - command: exit 0
    label: Shell Sanity
"#;

#[test]
fn cli_no_args_runs_validate() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    fs::write(temp.path().join("pyproject.toml"), "")?;

    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CI/CD setup is complete and ready!"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CI/CD setup validation"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_accepts_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    fs::write(temp.path().join("pyproject.toml"), "")?;

    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.args(["validate", "--project"]).arg(temp.path());
    cmd.assert().success();
    Ok(())
}

#[test]
fn cli_explicit_missing_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.args(["validate", "--config", "nope.yml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("files: {broken");
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.arg("validate");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_init_creates_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.arg("init");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created .civet.yml"));
    assert!(temp.path().join(".civet.yml").exists());
    Ok(())
}

#[test]
fn cli_init_fails_if_config_exists() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.arg("init");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration already exists"));
    Ok(())
}

#[test]
fn cli_init_force_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.args(["init", "--force"]);
    cmd.assert().success();
    Ok(())
}

#[test]
fn cli_completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("civet"));
    Ok(())
}

#[test]
fn cli_files_subcommand_gates_on_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);

    // pyproject.toml missing
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.arg("files");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("0/1"));

    fs::write(temp.path().join("pyproject.toml"), "")?;
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.arg("files");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1/1"));
    Ok(())
}

#[test]
fn cli_tools_subcommand_gates_on_probes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "tools:\n  - command: this-tool-does-not-exist-12345 --version\n    label: Ghost\n",
    );
    let mut cmd = Command::new(cargo_bin("civet"));
    cmd.current_dir(temp.path());
    cmd.arg("tools");
    cmd.assert().failure();
    Ok(())
}
