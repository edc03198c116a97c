//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a workspace, a config
/// directory, and a `bin/` directory for fake build tools.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// A workspace containing `app/app.pro`.
  pub fn with_project() -> Self {
    let env = Self::new();
    env.write_file("ws/app/app.pro", "TEMPLATE = app\n");
    env
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Workspace root (canonicalized).
  pub fn workspace(&self) -> PathBuf {
    let p = self.temp.path().join("ws");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Config home (isolated per test).
  pub fn config_home(&self) -> PathBuf {
    let p = self.temp.path().join("config");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Directory for fake tools.
  pub fn bin_dir(&self) -> PathBuf {
    let p = self.temp.path().join("bin");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// File the fake tools append their invocations to.
  pub fn tool_log(&self) -> PathBuf {
    self.temp.path().join("tools.log")
  }

  pub fn tool_log_lines(&self) -> Vec<String> {
    std::fs::read_to_string(self.tool_log())
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Install fake `qmake` and `make` scripts into `dir`.
  ///
  /// Each appends a line to [`TestEnv::tool_log`] and exits with
  /// `$FAKE_QMAKE_EXIT` / `$FAKE_MAKE_EXIT` (default 0).
  #[cfg(unix)]
  pub fn install_fake_tools(&self, dir: &std::path::Path) {
    std::fs::create_dir_all(dir).unwrap();
    write_script(
      &dir.join("qmake"),
      "#!/bin/sh\necho \"qmake $*\" >> \"$QBUILD_TOOL_LOG\"\nexit ${FAKE_QMAKE_EXIT:-0}\n",
    );
    write_script(
      &dir.join("make"),
      "#!/bin/sh\necho \"make in $(pwd)\" >> \"$QBUILD_TOOL_LOG\"\nexit ${FAKE_MAKE_EXIT:-0}\n",
    );
  }

  /// Get a pre-configured Command for the qbuild binary.
  ///
  /// Sets environment variables for isolated testing:
  /// - `XDG_CONFIG_HOME` / `APPDATA`: isolated settings location
  /// - `WORKSPACE`, `QTDIR`: removed, so the host's values don't leak in
  /// - `QBUILD_TOOL_LOG`: where fake tools record their invocations
  /// - `PATH`: `bin/` first, so fake tools shadow real ones
  ///
  /// Runs in the workspace directory.
  pub fn qbuild_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("qbuild");
    cmd.env("XDG_CONFIG_HOME", self.config_home());
    cmd.env("APPDATA", self.config_home()); // For Windows
    cmd.env_remove("WORKSPACE");
    cmd.env_remove("QTDIR");
    cmd.env("QBUILD_TOOL_LOG", self.tool_log());

    let path = std::env::var_os("PATH").unwrap_or_default();
    let mut dirs = vec![self.bin_dir()];
    dirs.extend(std::env::split_paths(&path));
    cmd.env("PATH", std::env::join_paths(dirs).unwrap());

    cmd.current_dir(self.workspace());
    cmd
  }
}

#[cfg(unix)]
fn write_script(path: &std::path::Path, content: &str) {
  use std::os::unix::fs::PermissionsExt;

  std::fs::write(path, content).unwrap();
  let mut perms = std::fs::metadata(path).unwrap().permissions();
  perms.set_mode(0o755);
  std::fs::set_permissions(path, perms).unwrap();
}
