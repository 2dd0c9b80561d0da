//! Loading the personnel document.

use std::{fs, path::Path};

use serde_json::Value;

use crate::{Error, Result};

/// Read `path` and return its top-level array elements.
///
/// Any failure here is fatal for the run: a missing file, unreadable bytes,
/// invalid JSON, or a top-level value that is not an array.
pub fn load(path: &Path) -> Result<Vec<Value>> {
  tracing::info!("reading {}", path.display());

  if !path.exists() {
    return Err(Error::NotFound(path.to_path_buf()));
  }
  let text = fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;

  parse_records(&text, path)
}

/// Parse an in-memory document. `origin` only labels errors.
pub fn parse_records(text: &str, origin: &Path) -> Result<Vec<Value>> {
  let document: Value = serde_json::from_str(text).map_err(|source| Error::Json {
    path: origin.to_path_buf(),
    source,
  })?;

  match document {
    Value::Array(records) => {
      tracing::debug!(count = records.len(), "loaded person records");
      Ok(records)
    }
    _ => Err(Error::NotAnArray(origin.to_path_buf())),
  }
}
