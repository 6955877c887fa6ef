//! Platform detection and system primitives for cmtask
//!
//! This crate provides the small set of host-specific facilities the
//! workflow driver needs:
//! - OS detection (which build preset fits this machine)
//! - Parallelism hint for external tools
//! - Atomic symlink replacement

pub mod fs;
mod jobs;
mod os;

pub use jobs::{JOBS_ENV, job_count};
pub use os::Os;
