pub mod os;
pub mod paths;

use std::fmt;

/// Operating system family, which decides path conventions and the make tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
  Posix,
  Windows,
}

impl Family {
  /// Detect the family of the host this process runs on.
  pub fn current() -> Self {
    if cfg!(windows) { Self::Windows } else { Self::Posix }
  }

  /// Path separator used when anchoring relative paths.
  pub fn separator(self) -> char {
    match self {
      Self::Posix => '/',
      Self::Windows => '\\',
    }
  }

  /// Suffix appended to executable names.
  pub fn exe_suffix(self) -> &'static str {
    match self {
      Self::Posix => "",
      Self::Windows => ".exe",
    }
  }

  /// Native make tool run after the configurator.
  pub fn make_tool(self) -> &'static str {
    match self {
      Self::Posix => "make",
      Self::Windows => "nmake",
    }
  }

  /// Whether `path` is absolute under this family's rules.
  ///
  /// Decided lexically so a Windows path can be judged on a POSIX host and
  /// vice versa.
  ///
  /// - POSIX: leading `/`
  /// - Windows: drive root (`C:\`, `C:/`) or UNC prefix (`\\server`)
  pub fn is_absolute(self, path: &str) -> bool {
    match self {
      Self::Posix => path.starts_with('/'),
      Self::Windows => {
        let bytes = path.as_bytes();
        let drive_root =
          bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && matches!(bytes[2], b'\\' | b'/');
        drive_root || path.starts_with("\\\\") || path.starts_with("//")
      }
    }
  }

  /// `base`, this family's separator, then `rest`.
  ///
  /// The separator is always inserted, even after a trailing one.
  pub fn join(self, base: &str, rest: &str) -> String {
    format!("{}{}{}", base, self.separator(), rest)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Posix => "posix",
      Self::Windows => "windows",
    }
  }
}

impl fmt::Display for Family {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
