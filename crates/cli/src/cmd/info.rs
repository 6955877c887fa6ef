//! Implementation of the `cmt info` command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use cmt_core::{Project, default_preset};
use cmt_platform::Os;
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct Info {
  version: &'static str,
  platform: Option<Os>,
  default_preset: Option<String>,
  compile_db: Option<PathBuf>,
}

/// Execute the info command.
///
/// Reports the detected platform, the preset that would be used by default,
/// and where the published compile database currently points. Takes no preset
/// and must succeed even on platforms without a default.
pub fn cmd_info(json: bool) -> Result<()> {
  let platform = Os::current();
  let preset = platform.and_then(|os| default_preset(os).ok());
  let compile_db = Project::from_cwd()
    .ok()
    .and_then(|p| fs::read_link(p.compile_db_link()).ok());

  let info = Info {
    version: env!("CARGO_PKG_VERSION"),
    platform,
    default_preset: preset.map(|p| p.as_str().to_string()),
    compile_db,
  };

  if json {
    return output::print_json(&info);
  }

  output::print_info(&format!("cmtask v{}", info.version));
  output::print_stat(
    "platform",
    info.platform.map_or("unrecognized", |os| os.as_str()),
  );
  output::print_stat(
    "default preset",
    info.default_preset.as_deref().unwrap_or("none (pass --preset)"),
  );
  match &info.compile_db {
    Some(target) => output::print_stat("compile db", &target.display().to_string()),
    None => output::print_stat("compile db", "not published"),
  }
  Ok(())
}
