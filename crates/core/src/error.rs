//! Error types for cmt-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while driving the workflow.
///
/// Every variant is fatal for the current command; nothing is retried.
#[derive(Debug, Error)]
pub enum CoreError {
  /// No default preset is defined for the host platform.
  #[error("no default preset for this platform ({os}); pass --preset explicitly")]
  UnsupportedPlatform { os: String },

  /// The preset's build tree has no compile database yet.
  #[error("compile database not found: {0}")]
  CompileDbMissing(PathBuf),

  /// The compile database is not a JSON array of objects.
  #[error("malformed compile database at {path}")]
  MalformedDb {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// An external tool is not installed or not on PATH.
  #[error("{tool} not found on PATH")]
  ToolNotFound {
    tool: String,
    #[source]
    source: std::io::Error,
  },

  /// An external tool ran and failed; its status becomes ours.
  #[error("{tool} failed with exit code {code:?}")]
  ToolFailed { tool: String, code: Option<i32> },

  /// `cmt run` target has not been built.
  #[error("binary not built: {0}")]
  BinaryMissing(PathBuf),

  /// `cmt.toml` exists but does not parse.
  #[error("invalid cmt.toml: {0}")]
  Config(#[from] toml::de::Error),

  /// JSON serialization error.
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// I/O error during an operation.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
