//! Repository layout: where presets build to and where the database is published.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::preset::Preset;

/// Well-known name of the compile database file.
pub const COMPILE_DB: &str = "compile_commands.json";

/// A project rooted at a directory, with its configuration loaded.
#[derive(Debug, Clone)]
pub struct Project {
  root: PathBuf,
  config: Config,
}

impl Project {
  /// Open the project rooted at `root`, reading `cmt.toml` when present.
  pub fn open(root: &Path) -> Result<Self> {
    let root = dunce::canonicalize(root)?;
    let config = Config::load(&root)?;
    Ok(Self { root, config })
  }

  /// Open the project at the current working directory.
  pub fn from_cwd() -> Result<Self> {
    Self::open(Path::new("."))
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Build tree for one preset: `<root>/<build_root>/<preset>`.
  pub fn build_dir(&self, preset: &Preset) -> PathBuf {
    self.root.join(&self.config.build.root).join(preset.as_str())
  }

  /// Where the build driver writes the preset's compile database.
  pub fn compile_db_source(&self, preset: &Preset) -> PathBuf {
    self.build_dir(preset).join(COMPILE_DB)
  }

  /// The published, preset-independent database location at the repository
  /// root. Editors and analysis tools read this path only.
  pub fn compile_db_link(&self) -> PathBuf {
    self.root.join(COMPILE_DB)
  }

  /// Path of a named binary inside the preset's build tree.
  pub fn binary_path(&self, preset: &Preset, name: &str) -> PathBuf {
    self.build_dir(preset).join(name)
  }

  /// Binary launched by `cmt run` when `--bin` is not given: the configured
  /// `[run].binary`, else the repository directory name.
  pub fn default_binary(&self) -> Option<String> {
    self
      .config
      .run
      .binary
      .clone()
      .or_else(|| self.root.file_name().map(|n| n.to_string_lossy().into_owned()))
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  #[test]
  fn paths_derive_from_preset() {
    let temp = TempDir::new().unwrap();
    let project = Project::open(temp.path()).unwrap();
    let preset = Preset::new("clang_debug");

    let source = project.compile_db_source(&preset);
    assert!(source.ends_with("build/clang_debug/compile_commands.json"));
    assert_eq!(project.compile_db_link(), project.root().join(COMPILE_DB));
  }

  #[test]
  fn build_root_is_configurable() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cmt.toml"), "[build]\nroot = \"out\"\n").unwrap();
    let project = Project::open(temp.path()).unwrap();
    let preset = Preset::new("release");

    assert!(project.build_dir(&preset).ends_with("out/release"));
  }

  #[test]
  fn default_binary_prefers_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cmt.toml"), "[run]\nbinary = \"game\"\n").unwrap();
    let project = Project::open(temp.path()).unwrap();

    assert_eq!(project.default_binary().as_deref(), Some("game"));
  }

  #[test]
  fn default_binary_falls_back_to_directory_name() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("mgfw");
    fs::create_dir(&dir).unwrap();
    let project = Project::open(&dir).unwrap();

    assert_eq!(project.default_binary().as_deref(), Some("mgfw"));
  }

  #[test]
  fn missing_root_is_an_error() {
    assert!(Project::open(Path::new("/no/such/dir")).is_err());
  }
}
