use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use qbuild_lib::locate::locate;
use qbuild_lib::platform::Family;

use super::{capture_env, load_settings};
use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Serialize)]
struct LocateReport {
  path: String,
  source: String,
}

pub fn cmd_locate(qmake: Option<String>, settings_path: Option<&Path>, output: OutputFormat) -> Result<ExitCode> {
  let env = capture_env(None)?;
  let settings = load_settings(settings_path)?;
  let qmake_override = qmake.or_else(|| settings.qmake_override().map(str::to_string));

  let location = locate(&env, qmake_override.as_deref(), Family::current());

  if output.is_json() {
    print_json(&LocateReport {
      path: location.path,
      source: location.source.to_string(),
    })?;
  } else {
    println!("qmake:");
    print_stat("Path", &location.path);
    print_stat("Source", &location.source.to_string());
  }

  Ok(ExitCode::SUCCESS)
}
