//! Implementation of the `cmt check` command.

use anyhow::{Context, Result};
use cmt_core::{COMPILE_DB, Project, check, publish_compile_db, resolve_preset, tools};
use cmt_platform::job_count;

use crate::output;

/// Execute the check command.
///
/// Publishes the preset's compile database, writes a filtered copy (vendored
/// trees and configured generated sources dropped) into a per-invocation
/// temporary directory, and runs the analysis tools against that copy. The
/// temporary directory is removed whether the tools pass or fail.
pub fn cmd_check(preset: Option<String>, with_cppcheck: bool, fix: bool) -> Result<()> {
  let project = Project::from_cwd().context("Failed to open project")?;
  let preset = resolve_preset(preset)?;

  publish_compile_db(&project, &preset)?;

  let rules = project.config().check.rules();
  let jobs = job_count();
  check::with_filtered_db(&project, &rules, |dir| {
    tools::run_tool(tools::CLANG_TIDY, tools::run_clang_tidy(dir, jobs, fix))?;
    if with_cppcheck {
      tools::run_tool(tools::CPPCHECK, tools::cppcheck(&dir.join(COMPILE_DB)))?;
    }
    Ok(())
  })?;

  output::print_success("analysis clean");
  Ok(())
}
