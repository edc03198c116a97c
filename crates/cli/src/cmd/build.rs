//! Implementation of the `qbuild build` command.
//!
//! Runs qmake and then make for a project file, the way a CI host would run
//! a single build step.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use qbuild_lib::launch::ProcessLauncher;
use qbuild_lib::platform::Family;
use qbuild_lib::{BuildContext, BuildRequest, perform};

use super::{capture_env, load_settings};
use crate::output::{print_error, print_success};

/// Execute the build command.
///
/// Captures the process environment, loads global settings, and runs one
/// build step. Step diagnostics and tool output go to stdout.
///
/// A `--qmake` flag replaces the persisted override for this run.
pub fn cmd_build(
  project_file: &str,
  extra_args: &str,
  clean: bool,
  workspace: Option<PathBuf>,
  qmake: Option<String>,
  settings_path: Option<&Path>,
) -> Result<ExitCode> {
  let env = capture_env(workspace)?;
  let settings = load_settings(settings_path)?;

  let qmake_override = qmake.or_else(|| settings.qmake_override().map(str::to_string));
  let ctx = BuildContext::new(env, Family::current()).with_qmake_override(qmake_override);

  let request = BuildRequest {
    project_file: project_file.to_string(),
    extra_args: extra_args.to_string(),
    clean_build: clean,
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let launcher = ProcessLauncher::new();
  let mut log = std::io::stdout();

  if rt.block_on(perform(&request, &ctx, &launcher, &mut log)) {
    print_success("Build succeeded");
    Ok(ExitCode::SUCCESS)
  } else {
    print_error("Build failed");
    Ok(ExitCode::FAILURE)
  }
}
