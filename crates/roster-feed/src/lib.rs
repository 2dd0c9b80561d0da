//! File boundary for the roster connector.
//!
//! Loads the personnel document and writes the three run outputs. The
//! newline-delimited JSON codec is generic over [`std::io::Write`]; only
//! [`load`] and [`emit`] touch the file system.

mod emit;
pub mod error;
mod load;
mod ndjson;

pub use emit::{OutputPaths, emit};
pub use error::{Error, Result};
pub use load::{load, parse_records};
pub use ndjson::write_ndjson;
