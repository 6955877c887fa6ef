//! Implementation of the `cmt run` command.

use anyhow::{Context, Result};
use cmt_core::{CoreError, Project, resolve_preset, tools};

/// Execute the run command.
///
/// Launches a binary from the preset's build tree with passthrough arguments.
/// The binary name comes from `--bin`, then `[run].binary` in `cmt.toml`,
/// then the repository directory name.
pub fn cmd_run(preset: Option<String>, bin: Option<String>, args: Vec<String>) -> Result<()> {
  let project = Project::from_cwd().context("Failed to open project")?;
  let preset = resolve_preset(preset)?;

  let name = bin
    .or_else(|| project.default_binary())
    .context("No binary name: pass --bin or set [run].binary in cmt.toml")?;
  let path = project.binary_path(&preset, &name);
  if !path.is_file() {
    return Err(CoreError::BinaryMissing(path).into());
  }

  tools::run_tool(&name, tools::run_binary(&path, &args))?;
  Ok(())
}
