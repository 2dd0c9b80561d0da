//! Runtime wiring for the `roster-connector` binary.
//!
//! [`settings`] resolves where files live; [`run`] performs one
//! load → transform → emit pass.

pub mod run;
pub mod settings;

pub use run::{Summary, run};
pub use settings::ConnectorConfig;
