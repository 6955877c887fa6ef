//! CLI smoke tests for cmt.
//!
//! These tests exercise every code path that does not need the external
//! tools installed: help/version plumbing, `info`, and the error paths that
//! abort before any tool is spawned.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the cmt binary.
fn cmt_cmd() -> Command {
  cargo_bin_cmd!("cmt")
}

/// Lay out `<root>/build/<preset>/compile_commands.json` in a temp project.
fn temp_project_with_db(preset: &str, db_json: &str) -> TempDir {
  let temp = TempDir::new().unwrap();
  let dir = temp.path().join("build").join(preset);
  std::fs::create_dir_all(&dir).unwrap();
  std::fs::write(dir.join("compile_commands.json"), db_json).unwrap();
  temp
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  cmt_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  cmt_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("cmt"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["workflow", "build", "check", "coverage", "run", "info"] {
    cmt_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// info
// =============================================================================

#[test]
fn info_runs_without_a_project() {
  let temp = TempDir::new().unwrap();

  cmt_cmd()
    .arg("info")
    .current_dir(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("platform"))
    .stdout(predicate::str::contains("not published"));
}

#[test]
fn info_json_is_machine_readable() {
  let temp = TempDir::new().unwrap();

  let output = cmt_cmd()
    .arg("info")
    .arg("--json")
    .current_dir(temp.path())
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let info: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert!(info.get("platform").is_some());
  assert!(info.get("default_preset").is_some());
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_without_database_fails() {
  let temp = TempDir::new().unwrap();

  cmt_cmd()
    .arg("check")
    .arg("--preset")
    .arg("clang_debug")
    .current_dir(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("compile database not found"));
}

#[test]
fn check_with_malformed_database_fails_before_analysis() {
  let temp = temp_project_with_db("clang_debug", "{not json");

  cmt_cmd()
    .arg("check")
    .arg("--preset")
    .arg("clang_debug")
    .current_dir(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("malformed compile database"));
}

#[test]
fn check_with_invalid_config_fails() {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("cmt.toml"), "not toml {{{").unwrap();

  cmt_cmd()
    .arg("check")
    .arg("--preset")
    .arg("clang_debug")
    .current_dir(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("cmt.toml"));
}

// =============================================================================
// coverage
// =============================================================================

#[test]
fn coverage_without_build_tree_fails() {
  let temp = TempDir::new().unwrap();

  cmt_cmd()
    .arg("coverage")
    .arg("--preset")
    .arg("clang_debug")
    .current_dir(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("build tree missing"));
}

// =============================================================================
// run
// =============================================================================

#[test]
fn run_without_built_binary_fails() {
  let temp = TempDir::new().unwrap();

  cmt_cmd()
    .arg("run")
    .arg("--preset")
    .arg("clang_debug")
    .arg("--bin")
    .arg("demo")
    .current_dir(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("binary not built"));
}

#[cfg(unix)]
#[test]
fn run_executes_the_built_binary_and_propagates_its_status() {
  use std::os::unix::fs::PermissionsExt;

  let temp = TempDir::new().unwrap();
  let dir = temp.path().join("build").join("clang_debug");
  std::fs::create_dir_all(&dir).unwrap();
  let bin = dir.join("demo");
  std::fs::write(&bin, "#!/bin/sh\nexit 7\n").unwrap();
  std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

  cmt_cmd()
    .arg("run")
    .arg("--preset")
    .arg("clang_debug")
    .arg("--bin")
    .arg("demo")
    .current_dir(temp.path())
    .assert()
    .code(7);
}
