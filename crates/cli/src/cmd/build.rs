//! Implementation of the `cmt build` command.

use anyhow::{Context, Result};
use cmt_core::{Project, publish_compile_db, resolve_preset, tools};
use cmt_platform::job_count;

use crate::output;

/// Execute the build command.
///
/// Configures and builds the chosen preset, then publishes the preset's
/// compile database at the repository root.
pub fn cmd_build(preset: Option<String>) -> Result<()> {
  let project = Project::from_cwd().context("Failed to open project")?;
  let preset = resolve_preset(preset)?;

  tools::run_tool(tools::CMAKE, tools::cmake_configure(&preset))?;
  tools::run_tool(tools::CMAKE, tools::cmake_build(&preset, job_count()))?;
  let target = publish_compile_db(&project, &preset)?;

  output::print_success(&format!("build `{}` complete", preset));
  output::print_stat("compile db", &target.display().to_string());
  Ok(())
}
