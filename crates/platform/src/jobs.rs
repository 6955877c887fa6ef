//! Parallelism hint for external tools.

use std::env;
use std::thread;

use tracing::debug;

/// Environment variable overriding the detected core count.
pub const JOBS_ENV: &str = "CMT_JOBS";

/// Number of parallel jobs to hand to external tools.
///
/// Honors `CMT_JOBS` when set to a positive integer, otherwise falls back to
/// the available core count. The value is an opaque pass-through; cmtask
/// itself never schedules work.
pub fn job_count() -> usize {
  if let Ok(raw) = env::var(JOBS_ENV) {
    match raw.parse::<usize>() {
      Ok(n) if n > 0 => return n,
      _ => debug!(value = %raw, "ignoring unusable {}", JOBS_ENV),
    }
  }
  thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
  use serial_test::serial;

  use super::*;

  #[test]
  #[serial]
  fn env_override_wins() {
    temp_env::with_var(JOBS_ENV, Some("3"), || {
      assert_eq!(job_count(), 3);
    });
  }

  #[test]
  #[serial]
  fn zero_and_garbage_fall_back_to_detection() {
    for bad in ["0", "-2", "many"] {
      temp_env::with_var(JOBS_ENV, Some(bad), || {
        assert!(job_count() >= 1);
      });
    }
  }

  #[test]
  #[serial]
  fn unset_env_detects_at_least_one_core() {
    temp_env::with_var(JOBS_ENV, None::<&str>, || {
      assert!(job_count() >= 1);
    });
  }
}
