//! Person records as they arrive from the personnel feed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Wire key of the display name.
pub const NAME: &str = "name";
/// Wire key of the national identity number.
pub const NATIONAL_ID: &str = "nationalId";
pub const JOB_TITLE: &str = "jobTitle";
pub const AREA: &str = "area";
pub const EMPLOYMENT_TYPE: &str = "employmentType";

/// Keys that must be present and non-empty, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 2] = [NAME, NATIONAL_ID];

/// A view of one input record.
///
/// Apart from `name`, which must be text to build a handle, values are kept
/// as the JSON they arrived as. Optional attributes of any type are accepted;
/// only string values take part in rule matching. Keys not listed here are
/// ignored and survive untouched in the raw value the caller keeps.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
  pub name:            String,
  pub national_id:     Value,
  pub job_title:       Option<Value>,
  pub area:            Option<Value>,
  pub employment_type: Option<Value>,
}

impl PersonRecord {
  /// Read a raw JSON value.
  ///
  /// Fails if the value is not an object, a required field is missing (see
  /// [`first_missing_field`]), or `name` is present but not a string.
  pub fn from_value(raw: &Value) -> Result<Self> {
    let object = raw.as_object().ok_or(Error::NotAnObject)?;
    if let Some(field) = first_missing_field(object) {
      return Err(Error::MissingField(field));
    }

    let name = match object.get(NAME) {
      Some(Value::String(name)) => name.clone(),
      other => return Err(Error::NameNotText(other.cloned().unwrap_or(Value::Null))),
    };
    let optional = |key: &str| object.get(key).filter(|v| !v.is_null()).cloned();

    Ok(Self {
      name,
      national_id: object.get(NATIONAL_ID).cloned().unwrap_or(Value::Null),
      job_title: optional(JOB_TITLE),
      area: optional(AREA),
      employment_type: optional(EMPLOYMENT_TYPE),
    })
  }

  pub fn job_title(&self) -> Option<&str> { self.job_title.as_ref().and_then(Value::as_str) }

  pub fn area(&self) -> Option<&str> { self.area.as_ref().and_then(Value::as_str) }

  pub fn employment_type(&self) -> Option<&str> {
    self.employment_type.as_ref().and_then(Value::as_str)
  }

  /// The `{name, nationalId}` pair echoed in OK acknowledgements.
  pub fn summary(&self) -> PersonSummary {
    PersonSummary {
      name:        self.name.clone(),
      national_id: self.national_id.clone(),
    }
  }
}

/// Identity subset of a [`PersonRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
  pub name:        String,
  pub national_id: Value,
}

/// A value that counts as not provided: absent, null, `false`, zero, or an
/// empty string, array or object.
pub fn is_blank(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => true,
    Some(Value::Number(n)) => n.as_f64() == Some(0.0),
    Some(Value::String(s)) => s.is_empty(),
    Some(Value::Array(items)) => items.is_empty(),
    Some(Value::Object(fields)) => fields.is_empty(),
    Some(_) => false,
  }
}

/// Return the first required field that is blank.
pub fn first_missing_field(object: &Map<String, Value>) -> Option<&'static str> {
  REQUIRED_FIELDS
    .into_iter()
    .find(|field| is_blank(object.get(*field)))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn reads_known_fields_and_ignores_extras() {
    let raw = json!({
      "name": "Anna Öberg",
      "nationalId": "19800101-1234",
      "jobTitle": "Nurse",
      "area": "Hisingen",
      "costCentre": 4410,
    });
    let person = PersonRecord::from_value(&raw).unwrap();
    assert_eq!(person.name, "Anna Öberg");
    assert_eq!(person.national_id, "19800101-1234");
    assert_eq!(person.job_title(), Some("Nurse"));
    assert_eq!(person.area(), Some("Hisingen"));
    assert_eq!(person.employment_type, None);
  }

  #[test]
  fn rejects_non_objects() {
    let err = PersonRecord::from_value(&json!("Anna")).unwrap_err();
    assert!(matches!(err, Error::NotAnObject));
  }

  #[test]
  fn optional_fields_of_any_type_are_kept_but_not_text() {
    let raw = json!({ "name": "Anna", "nationalId": "1", "jobTitle": 7, "area": null });
    let person = PersonRecord::from_value(&raw).unwrap();
    assert_eq!(person.job_title, Some(json!(7)));
    assert_eq!(person.job_title(), None);
    assert_eq!(person.area, None);
  }

  #[test]
  fn non_string_national_id_is_carried_over() {
    let raw = json!({ "name": "Anna", "nationalId": 198001011234_u64 });
    let person = PersonRecord::from_value(&raw).unwrap();
    assert_eq!(person.national_id, json!(198001011234_u64));
  }

  #[test]
  fn non_string_name_is_rejected() {
    let raw = json!({ "name": 5, "nationalId": "1" });
    let err = PersonRecord::from_value(&raw).unwrap_err();
    assert!(matches!(err, Error::NameNotText(v) if v == json!(5)));
  }

  #[test]
  fn blank_values() {
    for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
      assert!(is_blank(Some(&value)), "{value}");
    }
    for value in [json!(true), json!(1), json!(" "), json!([0]), json!({ "a": 1 })] {
      assert!(!is_blank(Some(&value)), "{value}");
    }
    assert!(is_blank(None));
  }

  #[test]
  fn missing_field_checks_name_before_national_id() {
    let raw = json!({});
    assert_eq!(first_missing_field(raw.as_object().unwrap()), Some(NAME));

    let raw = json!({ "name": "Bo", "nationalId": "" });
    assert_eq!(
      first_missing_field(raw.as_object().unwrap()),
      Some(NATIONAL_ID)
    );

    let raw = json!({ "name": 0, "nationalId": "1" });
    assert_eq!(first_missing_field(raw.as_object().unwrap()), Some(NAME));

    let raw = json!({ "name": "Bo", "nationalId": "1" });
    assert_eq!(first_missing_field(raw.as_object().unwrap()), None);
  }
}
