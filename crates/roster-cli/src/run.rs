//! One connector run: load, transform, emit.

use anyhow::Context as _;
use chrono::NaiveDateTime;
use roster_core::{ProcessOptions, process_batch};

use crate::settings::ConnectorConfig;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
  pub directives:       usize,
  pub acknowledgements: usize,
  pub failed:           usize,
}

/// Execute a full run against `cfg`, stamping output with `now`.
///
/// Only a missing or unreadable input, or an output that cannot be written,
/// is an error. Individual record failures are reported in the outputs.
pub fn run(cfg: &ConnectorConfig, now: NaiveDateTime) -> anyhow::Result<Summary> {
  let records = roster_feed::load(&cfg.input)
    .with_context(|| format!("failed to load {}", cfg.input.display()))?;

  let options = ProcessOptions {
    domain:    cfg.domain.clone(),
    source:    cfg.source.clone(),
    timestamp: now,
  };
  let report = process_batch(&records, &options);

  roster_feed::emit(&report, &cfg.outputs).context("failed to write outputs")?;

  Ok(Summary {
    directives:       report.directives.len(),
    acknowledgements: report.acknowledgements.len(),
    failed:           report.fail_count(),
  })
}
