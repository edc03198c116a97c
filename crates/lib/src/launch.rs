//! Process launching.
//!
//! The build steps only need "run this program in that directory and tell
//! me the exit code". [`Launcher`] is that capability; [`ProcessLauncher`]
//! is the real implementation. It spawns the invocation's argv directly, so
//! no shell ever re-reads a path.

use std::future::Future;
use std::io;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::invocation::Invocation;
use crate::placeholder::EnvMap;

/// Errors that prevent a launched process from producing an exit code.
#[derive(Debug, Error)]
pub enum LaunchError {
  #[error("failed to launch '{command}': {source}")]
  Spawn {
    command: String,
    #[source]
    source: io::Error,
  },

  #[error("failed waiting for '{command}': {source}")]
  Wait {
    command: String,
    #[source]
    source: io::Error,
  },

  #[error("'{command}' was terminated before it exited")]
  Terminated { command: String },
}

/// Runs an invocation and reports its exit code.
///
/// Blocks (asynchronously) until the process exits. Any timeout or
/// cancellation policy belongs to the implementation.
pub trait Launcher {
  fn launch(&self, invocation: &Invocation, env: &EnvMap) -> impl Future<Output = Result<i32, LaunchError>>;
}

/// Spawns invocations as child processes.
///
/// The build environment is applied on top of the inherited one. Output goes
/// straight to this process's stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
  pub fn new() -> Self {
    Self
  }
}

impl Launcher for ProcessLauncher {
  async fn launch(&self, invocation: &Invocation, env: &EnvMap) -> Result<i32, LaunchError> {
    info!(invocation = %invocation, "launching");

    let mut command = Command::new(&invocation.program);
    command
      .args(&invocation.args)
      .current_dir(&invocation.work_dir)
      .envs(env);

    let mut child = command.spawn().map_err(|e| LaunchError::Spawn {
      command: invocation.command_line.clone(),
      source: e,
    })?;

    let status = child.wait().await.map_err(|e| LaunchError::Wait {
      command: invocation.command_line.clone(),
      source: e,
    })?;

    let code = status.code().ok_or_else(|| LaunchError::Terminated {
      command: invocation.command_line.clone(),
    })?;

    debug!(cmd = %invocation.command_line, code, "process exited");
    Ok(code)
  }
}
