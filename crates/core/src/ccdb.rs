//! Compile database records and filtering.
//!
//! CMake writes one JSON record per translation unit. cmtask never interprets
//! the build commands inside them; records stay opaque JSON objects so every
//! field — known or not — survives the filter verbatim for the analysis tools.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

/// One entry of `compile_commands.json`, kept as an opaque JSON object.
pub type Record = Map<String, Value>;

/// Predicate dropping records from a filtered database.
///
/// Both variants have independently earned their keep: `PathContains` drops
/// vendored dependency trees, `FileNamed` drops individual generated or
/// test-framework sources. They compose freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcludeRule {
  /// Drop records whose `file` path contains the substring.
  PathContains(String),
  /// Drop records whose `file` name (final path component) matches exactly.
  FileNamed(String),
}

impl ExcludeRule {
  fn matches(&self, record: &Record) -> bool {
    let Some(file) = record.get("file").and_then(Value::as_str) else {
      return false;
    };
    match self {
      ExcludeRule::PathContains(fragment) => file.contains(fragment.as_str()),
      ExcludeRule::FileNamed(name) => {
        Path::new(file).file_name().and_then(|n| n.to_str()) == Some(name.as_str())
      }
    }
  }
}

/// Load the database at `path`.
///
/// Anything other than a JSON array of objects is malformed; a missing file
/// means no build has published a database yet.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      return Err(CoreError::CompileDbMissing(path.to_path_buf()));
    }
    Err(e) => return Err(e.into()),
  };
  serde_json::from_str(&content).map_err(|source| CoreError::MalformedDb {
    path: path.to_path_buf(),
    source,
  })
}

/// The ordered subsequence of `records` matched by no rule.
pub fn filter_records(records: &[Record], rules: &[ExcludeRule]) -> Vec<Record> {
  records
    .iter()
    .filter(|record| !rules.iter().any(|rule| rule.matches(record)))
    .cloned()
    .collect()
}

/// Serialize `records` to `path` for a downstream tool.
pub fn write_records(records: &[Record], path: &Path) -> Result<()> {
  let json = serde_json::to_string_pretty(records)?;
  fs::write(path, json)?;
  Ok(())
}
