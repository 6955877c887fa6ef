//! Project configuration (`cmt.toml`).
//!
//! Everything has a sensible default; a missing file is not an error. The
//! file exists so projects can rename their build root, point `cmt run` at
//! the right binary, and tune which records the analysis filter drops.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ccdb::ExcludeRule;
use crate::error::Result;

/// File name looked up at the repository root.
pub const CONFIG_FILE: &str = "cmt.toml";

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub build: BuildSection,

  #[serde(default)]
  pub run: RunSection,

  #[serde(default)]
  pub check: CheckSection,
}

/// `[build]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  /// Build output root, relative to the repository root.
  #[serde(default = "default_build_root")]
  pub root: String,
}

/// `[run]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunSection {
  /// Binary launched by `cmt run` when `--bin` is not given.
  #[serde(default)]
  pub binary: Option<String>,
}

/// `[check]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckSection {
  /// Drop records whose file path contains any of these substrings.
  #[serde(default = "default_exclude_paths")]
  pub exclude_paths: Vec<String>,

  /// Drop records whose file name matches any of these exactly.
  #[serde(default)]
  pub exclude_files: Vec<String>,
}

fn default_build_root() -> String {
  "build".to_string()
}

fn default_exclude_paths() -> Vec<String> {
  // CMake FetchContent checkouts land under <build>/_deps/
  vec!["/_deps/".to_string()]
}

impl Default for BuildSection {
  fn default() -> Self {
    Self {
      root: default_build_root(),
    }
  }
}

impl Default for CheckSection {
  fn default() -> Self {
    Self {
      exclude_paths: default_exclude_paths(),
      exclude_files: Vec::new(),
    }
  }
}

impl CheckSection {
  /// Exclusion rules for the compile-database filter.
  pub fn rules(&self) -> Vec<ExcludeRule> {
    self
      .exclude_paths
      .iter()
      .cloned()
      .map(ExcludeRule::PathContains)
      .chain(self.exclude_files.iter().cloned().map(ExcludeRule::FileNamed))
      .collect()
  }
}

impl Config {
  /// Load `cmt.toml` from `dir`, falling back to defaults when absent.
  pub fn load(dir: &Path) -> Result<Self> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
      return Ok(Self::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
  }
}
