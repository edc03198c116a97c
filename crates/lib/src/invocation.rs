//! Command lines for the configurator and make steps.
//!
//! Each step carries both the display form of its command line and the
//! argv actually spawned. The tool and project path are argv entries as-is;
//! only the extra arguments are split into words.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::platform::Family;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvocationError {
  #[error("cannot split extra arguments (unbalanced quotes?): {0}")]
  UnsplittableArgs(String),
}

/// Assemble the configurator command line.
///
/// Produces `<tool> -r "<project>"`, followed by a space and `extra_args`
/// when those are non-empty. `extra_args` is appended verbatim.
pub fn build_command(tool: &str, project_path: &str, extra_args: &str) -> String {
  let mut command = format!("{} -r \"{}\"", tool, project_path);
  if !extra_args.is_empty() {
    command.push(' ');
    command.push_str(extra_args);
  }
  command
}

/// A program, its arguments, and the directory to run it in.
///
/// Built fresh for each step of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: String,
  pub args: Vec<String>,
  /// Human-readable form, for logs.
  pub command_line: String,
  pub work_dir: PathBuf,
}

impl Invocation {
  /// The configurator step.
  ///
  /// `extra_args` is split with POSIX shell quoting rules; nothing is
  /// expanded.
  pub fn configure(tool: &str, project_path: &str, extra_args: &str, work_dir: &Path) -> Result<Self, InvocationError> {
    let extra = shlex::split(extra_args).ok_or_else(|| InvocationError::UnsplittableArgs(extra_args.to_string()))?;

    let mut args = vec!["-r".to_string(), project_path.to_string()];
    args.extend(extra);

    Ok(Self {
      program: tool.to_string(),
      args,
      command_line: build_command(tool, project_path, extra_args),
      work_dir: work_dir.to_path_buf(),
    })
  }

  /// The make step: the family's make tool with no arguments.
  pub fn make(family: Family, work_dir: &Path) -> Self {
    Self {
      program: family.make_tool().to_string(),
      args: Vec::new(),
      command_line: family.make_tool().to_string(),
      work_dir: work_dir.to_path_buf(),
    }
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} (in {})", self.command_line, self.work_dir.display())
  }
}
