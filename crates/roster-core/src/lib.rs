//! Core types and the record transformation for the roster connector.
//!
//! This crate is deliberately free of file-system access. It turns raw person
//! records (already parsed JSON values) into create-directives,
//! acknowledgements and run-log lines; `roster-feed` owns the files.

pub mod directive;
pub mod error;
pub mod handle;
pub mod person;
pub mod process;
pub mod rules;
pub mod run_log;

pub use error::{Error, Result};
pub use process::{ProcessOptions, RecordFailure, RunReport, process_batch};
