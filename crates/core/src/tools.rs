//! External tool invocation.
//!
//! Every unit of real work is delegated to an external process; this module
//! only assembles argument lists and propagates exit status. Children inherit
//! stdio so their output streams straight to the terminal.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{CoreError, Result};
use crate::preset::Preset;

pub const CMAKE: &str = "cmake";
pub const CLANG_TIDY: &str = "run-clang-tidy";
pub const CPPCHECK: &str = "cppcheck";
pub const GCOVR: &str = "gcovr";

/// `cmake --preset <p>`
pub fn cmake_configure(preset: &Preset) -> Command {
  let mut cmd = Command::new(CMAKE);
  cmd.arg("--preset").arg(preset.as_str());
  cmd
}

/// `cmake --build --preset <p> --parallel <jobs>`
pub fn cmake_build(preset: &Preset, jobs: usize) -> Command {
  let mut cmd = Command::new(CMAKE);
  cmd
    .arg("--build")
    .arg("--preset")
    .arg(preset.as_str())
    .arg("--parallel")
    .arg(jobs.to_string());
  cmd
}

/// `cmake --workflow --preset <p>`
pub fn cmake_workflow(preset: &Preset) -> Command {
  let mut cmd = Command::new(CMAKE);
  cmd.arg("--workflow").arg("--preset").arg(preset.as_str());
  cmd
}

/// `run-clang-tidy -quiet -p <db_dir> -j <jobs> [-fix]`
pub fn run_clang_tidy(db_dir: &Path, jobs: usize, fix: bool) -> Command {
  let mut cmd = Command::new(CLANG_TIDY);
  cmd
    .arg("-quiet")
    .arg("-p")
    .arg(db_dir)
    .arg("-j")
    .arg(jobs.to_string());
  if fix {
    cmd.arg("-fix");
  }
  cmd
}

/// `cppcheck --project=<db_file> --enable=warning,style --inline-suppr`
pub fn cppcheck(db_file: &Path) -> Command {
  let mut cmd = Command::new(CPPCHECK);
  cmd
    .arg(format!("--project={}", db_file.display()))
    .arg("--enable=warning,style")
    .arg("--inline-suppr");
  cmd
}

/// `gcovr --root <repo> --html-details <report>`, run inside the build tree
/// so gcov object files are found without a process-wide chdir.
pub fn gcovr(repo_root: &Path, build_dir: &Path, report: &Path) -> Command {
  let mut cmd = Command::new(GCOVR);
  cmd
    .current_dir(build_dir)
    .arg("--root")
    .arg(repo_root)
    .arg("--html-details")
    .arg(report);
  cmd
}

/// The built binary itself, with passthrough arguments.
pub fn run_binary(path: &Path, args: &[String]) -> Command {
  let mut cmd = Command::new(path);
  cmd.args(args);
  cmd
}

/// Run a tool to completion.
///
/// A non-zero exit becomes [`CoreError::ToolFailed`] carrying the child's
/// status for verbatim propagation; nothing is retried or masked. A child
/// killed by a signal reports `code: None`.
pub fn run_tool(tool: &str, mut cmd: Command) -> Result<()> {
  info!(cmd = %render(&cmd), "running");
  let status = cmd.status().map_err(|source| match source.kind() {
    io::ErrorKind::NotFound => CoreError::ToolNotFound {
      tool: tool.to_string(),
      source,
    },
    _ => CoreError::Io(source),
  })?;

  if !status.success() {
    return Err(CoreError::ToolFailed {
      tool: tool.to_string(),
      code: status.code(),
    });
  }
  Ok(())
}

fn render(cmd: &Command) -> String {
  let mut line = cmd.get_program().to_string_lossy().into_owned();
  for arg in cmd.get_args() {
    line.push(' ');
    line.push_str(&arg.to_string_lossy());
  }
  line
}
