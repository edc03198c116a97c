//! The build step: configure with qmake, then run make.
//!
//! [`run_build`] does the work and reports a typed result. [`perform`] is
//! the boundary used by hosts; it never fails, it logs and returns `false`.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::consts::WORKSPACE_VAR;
use crate::invocation::{Invocation, InvocationError};
use crate::launch::{LaunchError, Launcher};
use crate::locate::locate;
use crate::placeholder::EnvMap;
use crate::platform::Family;
use crate::resolve::{ResolveError, ResolveMode, resolve_path, work_dir};

/// User-configured parameters for one build step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
  /// Project file path; may contain `$VAR` references.
  pub project_file: String,
  /// Extra configurator arguments, passed through verbatim.
  pub extra_args: String,
  /// Reserved. Accepted but has no effect.
  pub clean_build: bool,
}

/// Everything a build step takes from its host.
#[derive(Debug, Clone)]
pub struct BuildContext {
  /// Environment captured for this build.
  pub env: EnvMap,
  pub family: Family,
  /// Global configurator override, from settings.
  pub qmake_override: Option<String>,
}

impl BuildContext {
  pub fn new(env: EnvMap, family: Family) -> Self {
    Self {
      env,
      family,
      qmake_override: None,
    }
  }

  pub fn with_qmake_override(mut self, path: Option<String>) -> Self {
    self.qmake_override = path;
    self
  }
}

/// How a build step ended when nothing went wrong launching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
  Success,
  /// qmake exited non-zero; make was not run.
  ConfigureFailed { code: i32 },
  MakeFailed { code: i32 },
}

impl BuildOutcome {
  pub fn is_success(self) -> bool {
    matches!(self, BuildOutcome::Success)
  }
}

/// Errors that abort a build step.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error(transparent)]
  Resolve(#[from] ResolveError),

  #[error(transparent)]
  Invocation(#[from] InvocationError),

  #[error(transparent)]
  Launch(#[from] LaunchError),

  #[error("failed to write build log: {0}")]
  Log(#[from] io::Error),
}

/// Run one build step, writing progress lines to `log`.
///
/// The configurator runs first, in the project file's directory. Make runs
/// in the same directory only if the configurator exits with 0.
pub async fn run_build<L, W>(
  request: &BuildRequest,
  ctx: &BuildContext,
  launcher: &L,
  log: &mut W,
) -> Result<BuildOutcome, BuildError>
where
  L: Launcher,
  W: Write,
{
  let workspace = ctx.env.get(WORKSPACE_VAR).map(String::as_str).unwrap_or("<unset>");
  writeln!(log, "MODULE: {}", workspace)?;

  if request.clean_build {
    debug!("clean build requested, nothing to do for it");
  }

  let project = resolve_path(&ctx.env, &request.project_file, ctx.family, ResolveMode::CheckFileExists)?;
  let dir = work_dir(&project)?;

  let tool = locate(&ctx.env, ctx.qmake_override.as_deref(), ctx.family);
  let configure = Invocation::configure(&tool.path, &project, &request.extra_args, dir)?;

  writeln!(log, "QMake call : {}", configure.command_line)?;
  writeln!(log, "QMake bin : {}", tool.path)?;
  writeln!(log, "QMake project file : {}", project)?;

  let code = launcher.launch(&configure, &ctx.env).await?;
  if code != 0 {
    warn!(code, "qmake failed, skipping make");
    return Ok(BuildOutcome::ConfigureFailed { code });
  }

  let make = Invocation::make(ctx.family, dir);
  let code = launcher.launch(&make, &ctx.env).await?;
  if code != 0 {
    warn!(code, tool = %make.command_line, "make failed");
    return Ok(BuildOutcome::MakeFailed { code });
  }

  info!(project = %project, "build succeeded");
  Ok(BuildOutcome::Success)
}

/// Run one build step and reduce the result to success or failure.
///
/// Errors are written to `log` and traced, never returned.
pub async fn perform<L, W>(request: &BuildRequest, ctx: &BuildContext, launcher: &L, log: &mut W) -> bool
where
  L: Launcher,
  W: Write,
{
  match run_build(request, ctx, launcher, log).await {
    Ok(outcome) => outcome.is_success(),
    Err(e) => {
      error!(error = %e, "build step failed");
      if let Err(log_err) = writeln!(log, "{}", e) {
        error!(error = %log_err, "failed to write build log");
      }
      false
    }
  }
}
