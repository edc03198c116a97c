mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{ConfigAction, cmd_build, cmd_config, cmd_info, cmd_locate, cmd_resolve};
use crate::output::OutputFormat;

/// qbuild - run qmake and make for a Qt project
#[derive(Parser)]
#[command(name = "qbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Settings file to use instead of the default location
  #[arg(long, global = true, value_name = "FILE")]
  settings: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Configure with qmake, then build with make
  Build {
    /// Project file; relative paths are anchored to the workspace, $VARS are expanded
    project_file: String,

    /// Extra arguments appended verbatim to the qmake command line
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    extra_args: String,

    /// Request a clean build (currently has no effect)
    #[arg(long)]
    clean: bool,

    /// Workspace root (default: current directory, or $WORKSPACE if set)
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// qmake binary to prefer for this build
    #[arg(long)]
    qmake: Option<String>,
  },

  /// Show which qmake binary would be used
  Locate {
    /// qmake binary to prefer
    #[arg(long)]
    qmake: Option<String>,

    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Resolve a project file path without building
  Resolve {
    project_file: String,

    /// Workspace root (default: current directory, or $WORKSPACE if set)
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// Skip the file existence check
    #[arg(long)]
    no_check: bool,
  },

  /// Manage global settings
  Config {
    #[command(subcommand)]
    action: ConfigAction,
  },

  /// Show platform information
  Info,
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let settings = cli.settings.as_deref();

  match cli.command {
    Commands::Build {
      project_file,
      extra_args,
      clean,
      workspace,
      qmake,
    } => cmd_build(&project_file, &extra_args, clean, workspace, qmake, settings),
    Commands::Locate { qmake, output } => cmd_locate(qmake, settings, output),
    Commands::Resolve {
      project_file,
      workspace,
      no_check,
    } => cmd_resolve(&project_file, workspace, no_check),
    Commands::Config { action } => cmd_config(action, settings),
    Commands::Info => {
      cmd_info();
      Ok(ExitCode::SUCCESS)
    }
  }
}
