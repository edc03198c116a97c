//! Implementation of the `qbuild config` command.
//!
//! Manages the persisted global settings every build starts from.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Subcommand;

use qbuild_lib::settings::Settings;

use super::settings_path;
use crate::output::{OutputFormat, print_info, print_json, print_stat, print_success, print_warning};

#[derive(Subcommand)]
pub enum ConfigAction {
  /// Print the current settings
  Show {
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Set the global qmake binary
  SetQmakePath { path: String },

  /// Remove the global qmake binary
  Clear,
}

pub fn cmd_config(action: ConfigAction, explicit: Option<&Path>) -> Result<ExitCode> {
  let path = settings_path(explicit)?;
  let mut settings = Settings::load_from(&path).context("Failed to load settings")?;

  match action {
    ConfigAction::Show { output } => {
      if output.is_json() {
        print_json(&settings)?;
      } else {
        println!("Settings:");
        print_stat("File", &path.display().to_string());
        print_stat("qmake path", settings.qmake_override().unwrap_or("(not set)"));
      }
    }
    ConfigAction::SetQmakePath { path: qmake } => {
      let qmake = qmake.trim().to_string();
      if !Path::new(&qmake).exists() {
        print_warning(&format!("{} does not exist; builds will ignore it until it does", qmake));
      }
      settings.qmake_path = Some(qmake);
      settings.save_to(&path).context("Failed to save settings")?;
      print_success("qmake path saved");
    }
    ConfigAction::Clear => {
      if settings.qmake_path.take().is_none() {
        print_info("qmake path was not set");
      } else {
        settings.save_to(&path).context("Failed to save settings")?;
        print_success("qmake path cleared");
      }
    }
  }

  Ok(ExitCode::SUCCESS)
}
