//! The static role rule table.
//!
//! Every rule is evaluated for every record; matching rules contribute their
//! roles additively and the result is deduplicated and sorted. Rule order
//! therefore never affects the outcome.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::person::PersonRecord;

// ─── Roles ───────────────────────────────────────────────────────────────────

pub const BASE_ROLE: &str = "Base-role";
pub const CHARTING_ROLE: &str = "Charting-role";
pub const FIXED_TERM_ROLE: &str = "Fixed-term-role";

/// Ordered, duplicate-free set of role identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<String>);

impl RoleSet {
  pub fn new() -> Self { Self::default() }

  pub fn insert(&mut self, role: impl Into<String>) { self.0.insert(role.into()); }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self(iter.into_iter().map(Into::into).collect())
  }
}

impl<S: Into<String>> Extend<S> for RoleSet {
  fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
    self.0.extend(iter.into_iter().map(Into::into));
  }
}

// ─── Conditions ──────────────────────────────────────────────────────────────

/// An optional person attribute a rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
  JobTitle,
  Area,
  EmploymentType,
}

impl Attribute {
  fn of(self, person: &PersonRecord) -> Option<&str> {
    match self {
      Self::JobTitle => person.job_title(),
      Self::Area => person.area(),
      Self::EmploymentType => person.employment_type(),
    }
  }
}

/// Exact, case-sensitive equality on one attribute. An absent or non-string
/// attribute never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
  pub attribute: Attribute,
  pub equals:    &'static str,
}

impl Condition {
  pub const fn new(attribute: Attribute, equals: &'static str) -> Self {
    Self { attribute, equals }
  }

  pub fn holds(&self, person: &PersonRecord) -> bool {
    self.attribute.of(person) == Some(self.equals)
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// A conjunction of conditions and the roles granted when all of them hold.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
  pub all_of: &'static [Condition],
  pub grants: &'static [&'static str],
}

impl Rule {
  pub fn matches(&self, person: &PersonRecord) -> bool {
    self.all_of.iter().all(|c| c.holds(person))
  }
}

/// The role rule table.
pub const RULES: &[Rule] = &[
  Rule {
    all_of: &[
      Condition::new(Attribute::JobTitle, "Nurse"),
      Condition::new(Attribute::Area, "Hisingen"),
    ],
    grants: &[BASE_ROLE, CHARTING_ROLE],
  },
  Rule {
    all_of: &[Condition::new(Attribute::JobTitle, "Assistant Nurse")],
    grants: &[BASE_ROLE],
  },
  Rule {
    all_of: &[Condition::new(Attribute::EmploymentType, "contractor")],
    grants: &[FIXED_TERM_ROLE],
  },
];

/// Evaluate `rules` in full against `person`.
pub fn evaluate(rules: &[Rule], person: &PersonRecord) -> RoleSet {
  rules
    .iter()
    .filter(|rule| rule.matches(person))
    .flat_map(|rule| rule.grants.iter().copied())
    .collect()
}

/// Evaluate the built-in [`RULES`] table.
pub fn derive_roles(person: &PersonRecord) -> RoleSet { evaluate(RULES, person) }
