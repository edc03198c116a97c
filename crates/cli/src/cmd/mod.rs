mod build;
mod config;
mod info;
mod locate;
mod resolve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use qbuild_lib::EnvMap;
use qbuild_lib::consts::WORKSPACE_VAR;
use qbuild_lib::settings::Settings;

pub use build::cmd_build;
pub use config::{ConfigAction, cmd_config};
pub use info::cmd_info;
pub use locate::cmd_locate;
pub use resolve::cmd_resolve;

/// Capture this process's environment as the build environment.
///
/// An explicit `workspace` always becomes `WORKSPACE`. Otherwise an existing
/// `WORKSPACE` is kept, falling back to the current directory.
pub(crate) fn capture_env(workspace: Option<PathBuf>) -> Result<EnvMap> {
  let mut env: EnvMap = std::env::vars_os()
    .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
    .collect();

  let workspace = match workspace {
    Some(dir) => Some(dunce::canonicalize(&dir).with_context(|| format!("Workspace not found: {}", dir.display()))?),
    None if env.contains_key(WORKSPACE_VAR) => None,
    None => Some(std::env::current_dir().context("Failed to read current directory")?),
  };

  if let Some(dir) = workspace {
    env.insert(WORKSPACE_VAR.to_string(), dir.to_string_lossy().to_string());
  }

  Ok(env)
}

/// Where settings live: the `--settings` flag or the default location.
pub(crate) fn settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
  match explicit {
    Some(path) => Ok(path.to_path_buf()),
    None => Ok(Settings::default_path()?),
  }
}

/// Load settings for a build, degrading to defaults when no config
/// directory can be determined.
pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
  let path = match settings_path(explicit) {
    Ok(path) => path,
    Err(e) => {
      warn!(error = %e, "using default settings");
      return Ok(Settings::default());
    }
  };

  Settings::load_from(&path).context("Failed to load settings")
}
