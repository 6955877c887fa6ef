//! Implementation of the `cmt workflow` command.

use anyhow::{Context, Result};
use cmt_core::{Project, publish_compile_db, resolve_preset, tools};

use crate::output;

/// Execute the workflow command (the default when no subcommand is given).
///
/// Drives `cmake --workflow` for the chosen preset, then publishes the
/// preset's compile database at the repository root.
pub fn cmd_workflow(preset: Option<String>) -> Result<()> {
  let project = Project::from_cwd().context("Failed to open project")?;
  let preset = resolve_preset(preset)?;

  tools::run_tool(tools::CMAKE, tools::cmake_workflow(&preset))?;
  let target = publish_compile_db(&project, &preset)?;

  output::print_success(&format!("workflow `{}` complete", preset));
  output::print_stat("compile db", &target.display().to_string());
  Ok(())
}
