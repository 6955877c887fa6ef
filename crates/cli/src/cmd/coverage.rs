//! Implementation of the `cmt coverage` command.

use std::fs;

use anyhow::{Context, Result, bail};
use cmt_core::{Project, resolve_preset, tools};

use crate::output;

/// Execute the coverage command.
///
/// Runs gcovr against the preset's build tree and writes an HTML report into
/// `<build>/<preset>/coverage/`. The build tree must already exist; coverage
/// data comes from whatever the preset's instrumented binaries produced.
pub fn cmd_coverage(preset: Option<String>) -> Result<()> {
  let project = Project::from_cwd().context("Failed to open project")?;
  let preset = resolve_preset(preset)?;

  let build_dir = project.build_dir(&preset);
  if !build_dir.is_dir() {
    bail!(
      "build tree missing: {} (run `cmt build --preset {}` first)",
      build_dir.display(),
      preset
    );
  }

  let report_dir = build_dir.join("coverage");
  fs::create_dir_all(&report_dir)
    .with_context(|| format!("Failed to create {}", report_dir.display()))?;
  let report = report_dir.join("index.html");

  tools::run_tool(tools::GCOVR, tools::gcovr(project.root(), &build_dir, &report))?;

  output::print_success(&format!("coverage report for `{}`", preset));
  output::print_stat("report", &report.display().to_string());
  Ok(())
}
