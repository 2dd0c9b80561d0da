//! The human-readable run log.

use std::fmt;

use serde_json::Value;

/// Rendered for absent optional attributes in FAIL lines.
const ABSENT: &str = "-";

/// Accumulates run-log lines in event order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunLog {
  lines: Vec<String>,
}

impl RunLog {
  /// A log holding only the start marker.
  pub fn start(timestamp: &str) -> Self {
    Self { lines: vec![format!("[{timestamp}] Start connector run")] }
  }

  pub fn ok<'a>(
    &mut self,
    correlation_id: &str,
    name: &str,
    roles: impl IntoIterator<Item = &'a str>,
  ) {
    let roles = roles.into_iter().collect::<Vec<_>>().join(", ");
    self.lines.push(format!("[{correlation_id}] OK: {name} -> [{roles}]"));
  }

  pub fn no_roles(
    &mut self,
    correlation_id: &str,
    name: &str,
    job_title: Option<&Value>,
    area: Option<&Value>,
  ) {
    self.lines.push(format!(
      "[{correlation_id}] FAIL: no roles for {name} ({}, {})",
      render(job_title),
      render(area),
    ));
  }

  pub fn error(&mut self, correlation_id: &str, reason: &str) {
    self.lines.push(format!("[{correlation_id}] ERROR: {reason}"));
  }

  pub fn summary(&mut self, directives: usize, acknowledgements: usize) {
    self.lines.push(format!(
      "Done: wrote {directives} directives, {acknowledgements} acknowledgements"
    ));
  }

  pub fn lines(&self) -> &[String] { &self.lines }
}

/// Strings as their text, other values as JSON.
fn render(value: Option<&Value>) -> String {
  match value {
    None => ABSENT.to_owned(),
    Some(Value::String(s)) => s.clone(),
    Some(other) => other.to_string(),
  }
}

/// One line per event, each terminated by `\n`.
impl fmt::Display for RunLog {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for line in &self.lines {
      writeln!(f, "{line}")?;
    }
    Ok(())
  }
}
