//! Build preset identifiers and the platform default.

use std::fmt;

use cmt_platform::Os;

use crate::error::{CoreError, Result};

/// Name of a CMake preset, as understood by the external build driver.
///
/// Opaque to cmtask; it only travels from the command line (or the platform
/// default) into tool invocations and derived paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Preset(String);

impl Preset {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Preset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// The preset used when the caller does not pass one.
///
/// Pure total mapping over the supported platforms. macOS has no default
/// toolchain preset and fails here; `--preset` is the escape hatch.
pub fn default_preset(os: Os) -> Result<Preset> {
  match os {
    Os::Linux => Ok(Preset::new("clang_debug")),
    Os::Windows => Ok(Preset::new("msvc_debug")),
    Os::MacOs => Err(CoreError::UnsupportedPlatform { os: os.to_string() }),
  }
}

/// Resolve the preset a command should use: the explicit choice when given,
/// otherwise the platform default.
///
/// Called from inside each command handler, so the default is only ever
/// computed when a command actually needs it — commands that take no preset
/// work fine on platforms without a default.
pub fn resolve_preset(explicit: Option<String>) -> Result<Preset> {
  match explicit {
    Some(name) => Ok(Preset::new(name)),
    None => {
      let os = Os::current().ok_or_else(|| CoreError::UnsupportedPlatform {
        os: std::env::consts::OS.to_string(),
      })?;
      default_preset(os)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn linux_defaults_to_clang_debug() {
    assert_eq!(default_preset(Os::Linux).unwrap().as_str(), "clang_debug");
  }

  #[test]
  fn windows_defaults_to_msvc_debug() {
    assert_eq!(default_preset(Os::Windows).unwrap().as_str(), "msvc_debug");
  }

  #[test]
  fn macos_has_no_default() {
    assert!(matches!(
      default_preset(Os::MacOs),
      Err(CoreError::UnsupportedPlatform { .. })
    ));
  }

  #[test]
  fn resolution_is_deterministic() {
    let a = default_preset(Os::Linux).unwrap();
    let b = default_preset(Os::Linux).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn explicit_preset_skips_platform_lookup() {
    // Must hold on every host, supported or not
    let preset = resolve_preset(Some("asan".into())).unwrap();
    assert_eq!(preset.as_str(), "asan");
  }
}
