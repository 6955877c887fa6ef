//! cmt - developer workflow driver for CMake-preset projects.

mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmt_core::CoreError;
use tracing_subscriber::EnvFilter;

/// Developer workflow driver for CMake-preset projects
#[derive(Parser)]
#[command(name = "cmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the preset's CMake workflow and publish its compile database
  Workflow {
    /// CMake preset (platform default when omitted)
    #[arg(short, long)]
    preset: Option<String>,
  },

  /// Configure and build, then publish the compile database
  Build {
    /// CMake preset (platform default when omitted)
    #[arg(short, long)]
    preset: Option<String>,
  },

  /// Run static analysis against a filtered compile database
  Check {
    /// CMake preset (platform default when omitted)
    #[arg(short, long)]
    preset: Option<String>,

    /// Also run cppcheck against the filtered database
    #[arg(long)]
    cppcheck: bool,

    /// Let clang-tidy apply its suggested fixes
    #[arg(long)]
    fix: bool,
  },

  /// Generate a coverage report for the preset's build tree
  Coverage {
    /// CMake preset (platform default when omitted)
    #[arg(short, long)]
    preset: Option<String>,
  },

  /// Execute a binary from the preset's build tree
  Run {
    /// CMake preset (platform default when omitted)
    #[arg(short, long)]
    preset: Option<String>,

    /// Binary name (config `[run].binary` or the repository name when omitted)
    #[arg(long)]
    bin: Option<String>,

    /// Arguments passed through to the binary
    #[arg(trailing_var_arg = true)]
    args: Vec<String>,
  },

  /// Show platform, default preset, and published database status
  Info {
    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() {
  let cli = Cli::parse();

  // Tool command lines are logged at info; keep them visible by default.
  let default_filter = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
    )
    .without_time()
    .init();

  // Bare `cmt` is `cmt workflow`.
  let command = cli.command.unwrap_or(Commands::Workflow { preset: None });

  let result: Result<()> = match command {
    Commands::Workflow { preset } => cmd::cmd_workflow(preset),
    Commands::Build { preset } => cmd::cmd_build(preset),
    Commands::Check {
      preset,
      cppcheck,
      fix,
    } => cmd::cmd_check(preset, cppcheck, fix),
    Commands::Coverage { preset } => cmd::cmd_coverage(preset),
    Commands::Run { preset, bin, args } => cmd::cmd_run(preset, bin, args),
    Commands::Info { json } => cmd::cmd_info(json),
  };

  if let Err(err) = result {
    output::print_error(&format!("{err:#}"));
    // A failing tool's exit status is our exit status.
    if let Some(CoreError::ToolFailed {
      code: Some(code), ..
    }) = err.downcast_ref::<CoreError>()
    {
      std::process::exit(*code);
    }
    std::process::exit(1);
  }
}
