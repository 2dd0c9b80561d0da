//! Account handle normalization.
//!
//! A handle is the display name lowercased, with `å`, `ä` and `ö`
//! transliterated, whitespace runs collapsed to a single `.`, everything
//! outside `[a-z0-9.-]` dropped, and `@<domain>` appended.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Organizational mail domain appended to every handle.
pub const DEFAULT_DOMAIN: &str = "goteborg.se";

/// A normalized, domain-suffixed account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountHandle(String);

impl AccountHandle {
  /// Build the handle for `name` under `domain`.
  ///
  /// Total: an empty (or all-stripped) name yields `@<domain>`. Callers reject
  /// empty names before getting here.
  pub fn from_name(name: &str, domain: &str) -> Self {
    Self(format!("{}@{domain}", normalize_local_part(name)))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for AccountHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// The part of the handle before the `@`.
///
/// Idempotent: the output only contains `[a-z0-9.-]`, which passes through
/// unchanged.
pub fn normalize_local_part(name: &str) -> String {
  let lowered = name.trim().to_lowercase();
  let mut out = String::with_capacity(lowered.len());
  let mut in_whitespace = false;

  for c in lowered.chars() {
    if c.is_whitespace() {
      if !in_whitespace {
        out.push('.');
        in_whitespace = true;
      }
      continue;
    }
    in_whitespace = false;

    let c = transliterate(c);
    if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-' {
      out.push(c);
    }
  }

  out
}

fn transliterate(c: char) -> char {
  match c {
    'å' | 'ä' => 'a',
    'ö' => 'o',
    other => other,
  }
}
