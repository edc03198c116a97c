//! Build command integration tests.
//!
//! These run real processes, with fake `qmake`/`make` shell scripts placed
//! on `PATH` (or under a fake `QTDIR`), so they are Unix-only.

#![cfg(unix)]

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn build_runs_qmake_then_make() {
  let env = TestEnv::with_project();
  env.install_fake_tools(&env.bin_dir());
  let ws = env.workspace();
  let project = ws.join("app").join("app.pro");

  env
    .qbuild_cmd()
    .args(["build", "app/app.pro"])
    .assert()
    .success()
    .stdout(predicate::str::contains(format!("MODULE: {}", ws.display())))
    .stdout(predicate::str::contains(format!(
      "QMake call : qmake -r \"{}\"",
      project.display()
    )))
    .stdout(predicate::str::contains("QMake bin : qmake"))
    .stdout(predicate::str::contains("Build succeeded"));

  assert_eq!(
    env.tool_log_lines(),
    vec![
      format!("qmake -r {}", project.display()),
      format!("make in {}", ws.join("app").display()),
    ]
  );
}

#[test]
fn qmake_failure_skips_make() {
  let env = TestEnv::with_project();
  env.install_fake_tools(&env.bin_dir());

  env
    .qbuild_cmd()
    .env("FAKE_QMAKE_EXIT", "3")
    .args(["build", "app/app.pro"])
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Build failed"));

  let lines = env.tool_log_lines();
  assert_eq!(lines.len(), 1);
  assert!(lines[0].starts_with("qmake "));
}

#[test]
fn make_failure_fails_build() {
  let env = TestEnv::with_project();
  env.install_fake_tools(&env.bin_dir());

  env
    .qbuild_cmd()
    .env("FAKE_MAKE_EXIT", "2")
    .args(["build", "app/app.pro"])
    .assert()
    .failure()
    .code(1);

  assert_eq!(env.tool_log_lines().len(), 2);
}

#[test]
fn missing_project_file_runs_nothing() {
  let env = TestEnv::new();
  env.install_fake_tools(&env.bin_dir());

  env
    .qbuild_cmd()
    .args(["build", "app/missing.pro"])
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::contains("file not found"));

  assert!(env.tool_log_lines().is_empty());
}

#[test]
fn extra_args_are_passed_verbatim() {
  let env = TestEnv::with_project();
  env.install_fake_tools(&env.bin_dir());

  env
    .qbuild_cmd()
    .args(["build", "app/app.pro", "--extra-args", "CONFIG+=debug \"DEFINES+=A B\""])
    .assert()
    .success();

  let lines = env.tool_log_lines();
  assert!(lines[0].ends_with("app.pro CONFIG+=debug DEFINES+=A B"), "got {:?}", lines);
}

#[test]
fn project_path_expands_variables() {
  let env = TestEnv::with_project();
  env.install_fake_tools(&env.bin_dir());

  env
    .qbuild_cmd()
    .env("PROJECT_DIR", "app")
    .args(["build", "$PROJECT_DIR/app.pro"])
    .assert()
    .success();

  let project = env.workspace().join("app").join("app.pro");
  assert_eq!(env.tool_log_lines()[0], format!("qmake -r {}", project.display()));
}

#[test]
fn qtdir_qmake_is_preferred() {
  let env = TestEnv::with_project();
  env.install_fake_tools(&env.bin_dir());
  let qt_root = env.temp.path().join("qt");
  env.install_fake_tools(&qt_root.join("bin"));

  env
    .qbuild_cmd()
    .env("QTDIR", &qt_root)
    .args(["build", "app/app.pro"])
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
      "QMake bin : {}",
      qt_root.join("bin").join("qmake").display()
    )));
}

#[test]
fn workspace_flag_anchors_relative_paths() {
  let env = TestEnv::new();
  env.install_fake_tools(&env.bin_dir());
  env.write_file("elsewhere/lib/lib.pro", "TEMPLATE = lib\n");
  let elsewhere = dunce::canonicalize(env.temp.path().join("elsewhere")).unwrap();

  env
    .qbuild_cmd()
    .arg("build")
    .arg("lib/lib.pro")
    .arg("--workspace")
    .arg(&elsewhere)
    .assert()
    .success();

  assert_eq!(
    env.tool_log_lines()[1],
    format!("make in {}", elsewhere.join("lib").display())
  );
}

#[test]
fn configured_qmake_path_is_used() {
  let env = TestEnv::with_project();
  env.install_fake_tools(&env.bin_dir());
  let custom = env.temp.path().join("custom");
  env.install_fake_tools(&custom);
  let custom_qmake = custom.join("qmake");

  env
    .qbuild_cmd()
    .args(["config", "set-qmake-path"])
    .arg(&custom_qmake)
    .assert()
    .success();

  env
    .qbuild_cmd()
    .args(["build", "app/app.pro"])
    .assert()
    .success()
    .stdout(predicate::str::contains(format!("QMake bin : {}", custom_qmake.display())));
}

#[test]
fn shell_syntax_in_workspace_path_is_passed_through() {
  let env = TestEnv::new();
  env.install_fake_tools(&env.bin_dir());
  let project = env.write_file("p$QBNOPE`id`$(false)/app/app.pro", "TEMPLATE = app\n");
  let ws = project.parent().and_then(|p| p.parent()).unwrap().to_path_buf();
  let ws = dunce::canonicalize(&ws).unwrap();

  env
    .qbuild_cmd()
    .arg("build")
    .arg("app/app.pro")
    .arg("--workspace")
    .arg(&ws)
    .assert()
    .success();

  assert_eq!(
    env.tool_log_lines(),
    vec![
      format!("qmake -r {}", ws.join("app").join("app.pro").display()),
      format!("make in {}", ws.join("app").display()),
    ]
  );
}
