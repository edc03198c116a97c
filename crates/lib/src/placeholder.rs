//! `$VAR` substitution against a build's environment.
//!
//! Project paths may reference environment variables as `$NAME`. Each
//! reference is replaced by the value of the matching key in the
//! [`EnvMap`] supplied for the build.
//!
//! # Matching
//!
//! The input is scanned once, left to right. At every `$`, the longest key
//! that the following text starts with wins, so `$FOOBAR` picks `FOOBAR`
//! over `FOO` when both are defined. Substituted values are copied verbatim
//! and never rescanned, so a value containing `$OTHER` stays as written.
//!
//! A `$` that does not start a known key passes through unchanged.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use qbuild_lib::placeholder::substitute;
//!
//! let env = BTreeMap::from([("SRC".to_string(), "/home/ci/src".to_string())]);
//! assert_eq!(substitute("$SRC/app.pro", &env), "/home/ci/src/app.pro");
//! assert_eq!(substitute("$UNSET/app.pro", &env), "$UNSET/app.pro");
//! ```

use std::collections::BTreeMap;

/// Environment variables captured for a single build (name -> value).
pub type EnvMap = BTreeMap<String, String>;

/// Replace every `$KEY` reference in `input` with its value from `env`.
pub fn substitute(input: &str, env: &EnvMap) -> String {
  // Longest first, so the first hit at a position is the longest match
  let mut keys: Vec<&str> = env.keys().map(String::as_str).filter(|k| !k.is_empty()).collect();
  keys.sort_by(|a, b| b.len().cmp(&a.len()));

  let mut out = String::with_capacity(input.len());
  let mut rest = input;

  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    match keys.iter().find(|key| after.starts_with(**key)) {
      Some(key) => {
        out.push_str(&env[*key]);
        rest = &after[key.len()..];
      }
      None => {
        out.push('$');
        rest = after;
      }
    }
  }

  out.push_str(rest);
  out
}
