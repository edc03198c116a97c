//! qbuild-lib: qmake + make build steps.
//!
//! A build step resolves a project file against the build environment,
//! picks a qmake binary, runs `qmake -r` in the project's directory and then
//! the platform's make tool there:
//! - `placeholder`: `$VAR` substitution
//! - `resolve`: project path resolution and checks
//! - `locate`: qmake discovery
//! - `invocation` / `launch`: command lines and running them
//! - `build`: the step itself, with a fail-closed `perform` boundary
//! - `settings`: persisted global settings

pub mod build;
pub mod consts;
pub mod invocation;
pub mod launch;
pub mod locate;
pub mod placeholder;
pub mod platform;
pub mod resolve;
pub mod settings;

pub use build::{BuildContext, BuildError, BuildOutcome, BuildRequest, perform, run_build};
pub use placeholder::EnvMap;
