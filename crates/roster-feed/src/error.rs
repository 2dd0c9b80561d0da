//! Error type for `roster-feed`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{} does not exist", .0.display())]
  NotFound(PathBuf),

  #[error("could not access {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{} is not valid JSON: {source}", path.display())]
  Json {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("{} must contain a JSON array of person records", .0.display())]
  NotAnArray(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
