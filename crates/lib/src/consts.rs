//! Shared constants.

/// Application name, used for the per-user config directory.
pub const APP_NAME: &str = "qbuild";

/// Bare configurator name, resolved through the search path at launch time.
pub const QMAKE: &str = "qmake";

/// Environment variable holding the workspace root.
pub const WORKSPACE_VAR: &str = "WORKSPACE";

/// Environment variable holding the Qt installation root.
pub const QTDIR_VAR: &str = "QTDIR";

/// Settings file name within the config directory.
pub const SETTINGS_FILENAME: &str = "settings.json";
