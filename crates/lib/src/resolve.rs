//! Project file path resolution.
//!
//! Turns the user-supplied project path into an absolute path:
//! 1. Trim surrounding whitespace
//! 2. Substitute `$VAR` references from the build environment
//! 3. Anchor relative results to the `WORKSPACE` variable
//! 4. Optionally check that the file exists and can be read

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::consts::WORKSPACE_VAR;
use crate::placeholder::{EnvMap, substitute};
use crate::platform::Family;

/// Errors that can occur while resolving a project path.
#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("no project file given")]
  EmptyPath,

  #[error("cannot anchor relative path '{path}': WORKSPACE is not set")]
  MissingWorkspace { path: String },

  #[error("file not found: {0}")]
  NotFound(String),

  #[error("project file is a directory: {0}")]
  IsDirectory(String),

  #[error("file not readable: {path}: {source}")]
  Unreadable {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("resolved path has no parent directory: {0}")]
  NoParent(String),
}

/// How much checking [`resolve_path`] does on the final path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
  /// Lexical resolution only, no filesystem access.
  Unchecked,
  /// The path must name an existing, readable file.
  #[default]
  CheckFileExists,
}

impl ResolveMode {
  /// Apply this mode's check to an already anchored path.
  pub fn validate(self, path: &str) -> Result<(), ResolveError> {
    match self {
      ResolveMode::Unchecked => Ok(()),
      ResolveMode::CheckFileExists => {
        let metadata = match fs::metadata(path) {
          Ok(metadata) => metadata,
          Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ResolveError::NotFound(path.to_string())),
          Err(e) => {
            return Err(ResolveError::Unreadable {
              path: path.to_string(),
              source: e,
            });
          }
        };

        if metadata.is_dir() {
          return Err(ResolveError::IsDirectory(path.to_string()));
        }

        fs::File::open(path).map_err(|e| ResolveError::Unreadable {
          path: path.to_string(),
          source: e,
        })?;

        Ok(())
      }
    }
  }
}

/// Resolve a raw project path against the build environment.
///
/// Absolute results (after substitution) are returned as-is; relative ones
/// are prefixed with `$WORKSPACE` and the family's separator.
///
/// # Errors
///
/// - [`ResolveError::EmptyPath`] if nothing remains after trimming
/// - [`ResolveError::MissingWorkspace`] if the path is relative and `WORKSPACE` is unset
/// - the errors of [`ResolveMode::validate`] for the final path
pub fn resolve_path(env: &EnvMap, raw: &str, family: Family, mode: ResolveMode) -> Result<String, ResolveError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(ResolveError::EmptyPath);
  }

  let substituted = substitute(trimmed, env);

  let resolved = if family.is_absolute(&substituted) {
    substituted
  } else {
    let workspace = env
      .get(WORKSPACE_VAR)
      .filter(|w| !w.is_empty())
      .ok_or_else(|| ResolveError::MissingWorkspace {
        path: substituted.clone(),
      })?;
    family.join(workspace, &substituted)
  };

  debug!(raw = %raw, resolved = %resolved, ?mode, "resolved project path");

  mode.validate(&resolved)?;
  Ok(resolved)
}

/// Directory the build tools run in: the parent of the project file.
pub fn work_dir(project_path: &str) -> Result<&Path, ResolveError> {
  Path::new(project_path)
    .parent()
    .filter(|p| !p.as_os_str().is_empty())
    .ok_or_else(|| ResolveError::NoParent(project_path.to_string()))
}
