//! Per-record processing and the batch driver.

use std::fmt;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::{
  Error,
  directive::{Acknowledgement, CreateDirective, DEFAULT_SOURCE, correlation_id},
  handle::{AccountHandle, DEFAULT_DOMAIN},
  person::PersonRecord,
  rules::derive_roles,
  run_log::RunLog,
};

/// Wire format of run timestamps: local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ─── Options ─────────────────────────────────────────────────────────────────

/// Everything the transformation needs besides the records themselves.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
  /// Mail domain appended to account handles.
  pub domain:    String,
  /// Value of the `source` field on every directive.
  pub source:    String,
  /// Captured once per run; shared by the start marker and every directive.
  pub timestamp: NaiveDateTime,
}

impl ProcessOptions {
  /// Default domain and source at the given run time.
  pub fn at(timestamp: NaiveDateTime) -> Self {
    Self {
      domain: DEFAULT_DOMAIN.to_owned(),
      source: DEFAULT_SOURCE.to_owned(),
      timestamp,
    }
  }

  pub fn timestamp_string(&self) -> String {
    self.timestamp.format(TIMESTAMP_FORMAT).to_string()
  }
}

// ─── Record failures ─────────────────────────────────────────────────────────

/// Why a single record produced no directive.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFailure {
  /// A required field is absent, null or empty.
  MissingField(&'static str),
  /// The record is valid but no rule granted a role.
  NoRolesMatched {
    name:      String,
    job_title: Option<Value>,
    area:      Option<Value>,
  },
  /// The record could not be read at all.
  Malformed(String),
}

impl From<Error> for RecordFailure {
  fn from(e: Error) -> Self {
    match e {
      Error::MissingField(field) => Self::MissingField(field),
      other => Self::Malformed(other.to_string()),
    }
  }
}

/// The acknowledgement `reason` text.
impl fmt::Display for RecordFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingField(field) => write!(f, "missing '{field}'"),
      Self::NoRolesMatched { .. } => f.write_str("no roles matched the rules"),
      Self::Malformed(description) => f.write_str(description),
    }
  }
}

// ─── Processing ──────────────────────────────────────────────────────────────

/// Turn one raw input value into a directive, or explain why not.
///
/// Checks run in priority order: `name`, then `nationalId`, then the type of
/// `name`, then the rule table.
pub fn process_record(
  raw: &Value,
  options: &ProcessOptions,
) -> Result<CreateDirective, RecordFailure> {
  let person = PersonRecord::from_value(raw)?;
  let handle = AccountHandle::from_name(&person.name, &options.domain);
  let roles = derive_roles(&person);
  if roles.is_empty() {
    return Err(RecordFailure::NoRolesMatched {
      name:      person.name,
      job_title: person.job_title,
      area:      person.area,
    });
  }

  Ok(CreateDirective::create(
    &person,
    handle,
    roles,
    &options.source,
    &options.timestamp_string(),
  ))
}

/// Everything one run produces, ready to be emitted.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
  pub directives:       Vec<CreateDirective>,
  /// Exactly one per input record, in input order.
  pub acknowledgements: Vec<Acknowledgement>,
  pub log:              RunLog,
}

impl RunReport {
  pub fn ok_count(&self) -> usize {
    self.acknowledgements.iter().filter(|a| a.is_ok()).count()
  }

  pub fn fail_count(&self) -> usize { self.acknowledgements.len() - self.ok_count() }
}

/// Process every record in order. Never fails: each record's outcome is
/// captured in its acknowledgement and log line.
pub fn process_batch(records: &[Value], options: &ProcessOptions) -> RunReport {
  let mut report = RunReport {
    log: RunLog::start(&options.timestamp_string()),
    ..RunReport::default()
  };

  for (index, raw) in records.iter().enumerate() {
    let corr = correlation_id(index + 1);

    match process_record(raw, options) {
      Ok(directive) => {
        tracing::debug!(%corr, handle = %directive.username, "record provisioned");
        report
          .log
          .ok(&corr, &directive.display_name, directive.roles.iter());
        report.acknowledgements.push(Acknowledgement::ok(corr, &directive));
        report.directives.push(directive);
      }
      Err(failure) => {
        let reason = failure.to_string();
        tracing::warn!(%corr, %reason, "record rejected");
        match &failure {
          RecordFailure::NoRolesMatched { name, job_title, area } => report.log.no_roles(
            &corr,
            name,
            job_title.as_ref(),
            area.as_ref(),
          ),
          RecordFailure::MissingField(_) | RecordFailure::Malformed(_) => {
            report.log.error(&corr, &reason)
          }
        }
        report
          .acknowledgements
          .push(Acknowledgement::fail(corr, reason, raw));
      }
    }
  }

  report
    .log
    .summary(report.directives.len(), report.acknowledgements.len());
  report
}
