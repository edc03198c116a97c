//! Persisted global settings.
//!
//! Settings are stored as JSON in the per-user config directory:
//!
//! ```text
//! {config_dir}/settings.json
//! ```
//!
//! They are loaded once by the host and handed to each build as plain
//! values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::consts::SETTINGS_FILENAME;
use crate::platform::paths::config_dir;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("no config directory could be determined")]
  NoConfigDir,

  #[error("failed to read settings {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse settings {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("failed to serialize settings: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write settings {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// Global settings shared by all builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Path to the qmake binary to prefer over the bare name.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub qmake_path: Option<String>,
}

impl Settings {
  /// Default settings file location.
  pub fn default_path() -> Result<PathBuf, SettingsError> {
    config_dir()
      .map(|dir| dir.join(SETTINGS_FILENAME))
      .ok_or(SettingsError::NoConfigDir)
  }

  /// Load settings from `path`.
  ///
  /// Returns defaults if the file doesn't exist.
  pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = ?path, "no settings file, using defaults");
        return Ok(Self::default());
      }
      Err(e) => {
        return Err(SettingsError::Read {
          path: path.to_path_buf(),
          source: e,
        });
      }
    };

    serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
      path: path.to_path_buf(),
      source: e,
    })
  }

  /// Save settings to `path`.
  ///
  /// Uses atomic write (write to temp, then rename) to prevent corruption.
  pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
    let write_err = |e: io::Error| SettingsError::Write {
      path: path.to_path_buf(),
      source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(write_err)?;
    fs::rename(&temp_path, path).map_err(write_err)?;

    debug!(path = ?path, "settings saved");
    Ok(())
  }

  /// The qmake override, if one is set and non-blank.
  pub fn qmake_override(&self) -> Option<&str> {
    self.qmake_path.as_deref().map(str::trim).filter(|p| !p.is_empty())
  }
}
