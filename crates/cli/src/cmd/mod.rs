mod build;
mod check;
mod coverage;
mod info;
mod run;
mod workflow;

pub use build::cmd_build;
pub use check::cmd_check;
pub use coverage::cmd_coverage;
pub use info::cmd_info;
pub use run::cmd_run;
pub use workflow::cmd_workflow;
