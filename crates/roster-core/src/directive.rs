//! Output records: create-directives and acknowledgements.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  handle::AccountHandle,
  person::{PersonRecord, PersonSummary},
  rules::RoleSet,
};

/// Source system stamped on every directive.
pub const DEFAULT_SOURCE: &str = "BoK";

// ─── Create-directive ────────────────────────────────────────────────────────

/// The provisioning operation requested downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
  Create,
}

/// An instruction to provision one new account.
///
/// `externalId`, `jobTitle` and `area` carry the input values unchanged,
/// whatever their JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDirective {
  #[serde(rename = "op")]
  pub operation:    Operation,
  pub external_id:  Value,
  pub username:     AccountHandle,
  pub display_name: String,
  pub email:        AccountHandle,
  pub roles:        RoleSet,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub job_title:    Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub area:         Option<Value>,
  pub source:       String,
  pub timestamp:    String,
}

impl CreateDirective {
  pub fn create(
    person: &PersonRecord,
    handle: AccountHandle,
    roles: RoleSet,
    source: &str,
    timestamp: &str,
  ) -> Self {
    Self {
      operation: Operation::Create,
      external_id: person.national_id.clone(),
      username: handle.clone(),
      display_name: person.name.clone(),
      email: handle,
      roles,
      job_title: person.job_title.clone(),
      area: person.area.clone(),
      source: source.to_owned(),
      timestamp: timestamp.to_owned(),
    }
  }
}

// ─── Acknowledgement ─────────────────────────────────────────────────────────

/// `corr-` followed by the 1-based position, zero-padded to three digits.
pub fn correlation_id(position: usize) -> String { format!("corr-{position:03}") }

/// Per-record outcome; the variant name is the `status` wire value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum AckStatus {
  #[serde(rename = "OK")]
  Ok {
    roles:  RoleSet,
    person: PersonSummary,
  },
  #[serde(rename = "FAIL")]
  Fail {
    reason: String,
    /// The input record exactly as received.
    person: Value,
  },
}

/// A receipt for one input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
  #[serde(rename = "correlationId")]
  pub correlation_id: String,
  #[serde(flatten)]
  pub status:         AckStatus,
}

impl Acknowledgement {
  pub fn ok(correlation_id: String, directive: &CreateDirective) -> Self {
    Self {
      correlation_id,
      status: AckStatus::Ok {
        roles:  directive.roles.clone(),
        person: PersonSummary {
          name:        directive.display_name.clone(),
          national_id: directive.external_id.clone(),
        },
      },
    }
  }

  pub fn fail(correlation_id: String, reason: String, raw: &Value) -> Self {
    Self {
      correlation_id,
      status: AckStatus::Fail { reason, person: raw.clone() },
    }
  }

  pub fn is_ok(&self) -> bool { matches!(self.status, AckStatus::Ok { .. }) }
}
