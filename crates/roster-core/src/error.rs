//! Error types for `roster-core`.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("record is not a JSON object")]
  NotAnObject,

  #[error("missing '{0}'")]
  MissingField(&'static str),

  #[error("'name' must be a string, got {0}")]
  NameNotText(Value),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
