//! Configurator discovery.
//!
//! Picks the `qmake` binary for a build. Candidates are considered in this
//! order, each later one replacing the earlier choice when its file exists:
//!
//! 1. the bare name `qmake`, left to the search path at launch time
//! 2. the global override path from settings
//! 3. `$QTDIR/bin/qmake` (`.exe` on Windows)
//!
//! So a Qt root from the build environment beats the configured override.
//! Discovery never fails: when no candidate exists the bare name is used and
//! a missing tool surfaces as a launch failure.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::consts::{QMAKE, QTDIR_VAR};
use crate::placeholder::EnvMap;
use crate::platform::Family;

/// Where the chosen configurator came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSource {
  /// Bare name, resolved through the search path.
  Default,
  /// Global override from settings.
  Override,
  /// Derived from the Qt root variable.
  QtDir,
}

impl fmt::Display for ToolSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ToolSource::Default => write!(f, "search path"),
      ToolSource::Override => write!(f, "configured override"),
      ToolSource::QtDir => write!(f, "{}", QTDIR_VAR),
    }
  }
}

/// The configurator chosen for a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
  pub path: String,
  pub source: ToolSource,
}

/// Conventional configurator path under a Qt installation root.
pub fn qtdir_candidate(qt_root: &str, family: Family) -> String {
  let bin = family.join(qt_root, "bin");
  family.join(&bin, &format!("{}{}", QMAKE, family.exe_suffix()))
}

/// Decide which configurator to run, recording why.
pub fn locate(env: &EnvMap, global_override: Option<&str>, family: Family) -> ToolLocation {
  let mut location = ToolLocation {
    path: QMAKE.to_string(),
    source: ToolSource::Default,
  };

  if let Some(path) = global_override.map(str::trim).filter(|p| !p.is_empty()) {
    if Path::new(path).exists() {
      location = ToolLocation {
        path: path.to_string(),
        source: ToolSource::Override,
      };
    } else {
      debug!(path = %path, "configured qmake override does not exist, ignoring");
    }
  }

  if let Some(root) = env.get(QTDIR_VAR).filter(|r| !r.is_empty()) {
    let candidate = qtdir_candidate(root, family);
    if Path::new(&candidate).exists() {
      location = ToolLocation {
        path: candidate,
        source: ToolSource::QtDir,
      };
    } else {
      debug!(path = %candidate, "no qmake under {}", QTDIR_VAR);
    }
  }

  debug!(path = %location.path, source = %location.source, "located qmake");
  location
}

/// Path (or bare name) of the configurator to run.
pub fn locate_qmake(env: &EnvMap, global_override: Option<&str>, family: Family) -> String {
  locate(env, global_override, family).path
}
