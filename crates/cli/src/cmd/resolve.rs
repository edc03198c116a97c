use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use qbuild_lib::platform::Family;
use qbuild_lib::resolve::{ResolveMode, resolve_path};

use super::capture_env;
use crate::output::print_error;

pub fn cmd_resolve(project_file: &str, workspace: Option<PathBuf>, no_check: bool) -> Result<ExitCode> {
  let env = capture_env(workspace)?;
  let mode = if no_check {
    ResolveMode::Unchecked
  } else {
    ResolveMode::CheckFileExists
  };

  match resolve_path(&env, project_file, Family::current(), mode) {
    Ok(path) => {
      println!("{}", path);
      Ok(ExitCode::SUCCESS)
    }
    Err(e) => {
      print_error(&e.to_string());
      Ok(ExitCode::FAILURE)
    }
  }
}
