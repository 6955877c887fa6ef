//! Publishing the compile database symlink.

use std::path::PathBuf;

use tracing::info;

use crate::error::{CoreError, Result};
use crate::preset::Preset;
use crate::project::Project;

/// Publish `<build>/<preset>/compile_commands.json` at the repository root.
///
/// The well-known link is swapped atomically: a reader resolving it at any
/// moment sees either the previous database or the new one, never a missing
/// or half-written entry. When the preset has no database yet, the call fails
/// and whatever was published before stays untouched.
///
/// Returns the target the link now points at.
pub fn publish_compile_db(project: &Project, preset: &Preset) -> Result<PathBuf> {
  let source = project.compile_db_source(preset);
  if !source.is_file() {
    return Err(CoreError::CompileDbMissing(source));
  }

  let link = project.compile_db_link();
  cmt_platform::fs::replace_symlink(&source, &link)?;
  info!(preset = %preset, link = %link.display(), "compile database published");
  Ok(source)
}
