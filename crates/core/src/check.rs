//! The filter-and-analyze scaffolding behind `cmt check`.

use std::path::Path;

use tempfile::TempDir;
use tracing::debug;

use crate::ccdb::{self, ExcludeRule};
use crate::error::Result;
use crate::project::{COMPILE_DB, Project};

/// Hand `f` a temporary directory holding a filtered copy of the published
/// compile database, then remove the directory no matter how `f` fares.
///
/// The directory is created fresh per invocation and never outlives this
/// call. When `f` fails, its error is propagated unmasked after cleanup.
pub fn with_filtered_db<T>(
  project: &Project,
  rules: &[ExcludeRule],
  f: impl FnOnce(&Path) -> Result<T>,
) -> Result<T> {
  let records = ccdb::load_records(&project.compile_db_link())?;
  let kept = ccdb::filter_records(&records, rules);
  debug!(total = records.len(), kept = kept.len(), "filtered compile database");

  let dir = TempDir::new()?;
  ccdb::write_records(&kept, &dir.path().join(COMPILE_DB))?;

  let result = f(dir.path());
  if result.is_ok() {
    dir.close()?;
  }
  // On the error path the TempDir drop removes the directory; the
  // closure's error wins over any cleanup error.
  result
}
