//! Atomic symlink replacement.

use std::fs;
use std::io;
#[cfg(unix)]
use std::os::unix::fs::symlink;
#[cfg(windows)]
use std::os::windows::fs::symlink_file as symlink;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Atomically point `link` at `target`.
///
/// The new symlink is created at a temporary sibling path and renamed onto
/// `link` in a single filesystem operation. A reader resolving `link` at any
/// moment sees either the previous entry or the new one, never an absent or
/// half-written link. Replacing is last-writer-wins; no lock is taken.
pub fn replace_symlink(target: &Path, link: &Path) -> io::Result<()> {
  let staged = staging_path(link);

  // A staging entry left behind by an interrupted run would make symlink() fail.
  if staged.symlink_metadata().is_ok() {
    fs::remove_file(&staged)?;
  }

  symlink(target, &staged)?;
  if let Err(e) = fs::rename(&staged, link) {
    let _ = fs::remove_file(&staged);
    return Err(e);
  }

  debug!(link = %link.display(), target = %target.display(), "symlink replaced");
  Ok(())
}

fn staging_path(link: &Path) -> PathBuf {
  let mut name = link.file_name().unwrap_or_default().to_os_string();
  name.push(".new");
  link.with_file_name(name)
}
