//! Schema evaluation.
//!
//! Every call recomputes from scratch. Inputs are a handful of short strings,
//! so there is nothing to cache and nothing that can go stale.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::schema::{FieldSchema, FormSchema};
use crate::values::FormValues;

/// Outcome for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Message of the first failing rule.
    pub message: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Per-field results in schema order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<(&'static str, ValidationResult)>,
}

impl ValidationReport {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationResult> {
        self.results.iter().find(|(name, _)| *name == field).map(|(_, r)| r)
    }

    /// Error message for `field`, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(|r| r.message.as_deref())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, r)| r.valid)
    }

    /// `(field, message)` for every failing field, in schema order.
    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.results
            .iter()
            .filter_map(|(name, r)| r.message.as_deref().map(|m| (*name, m)))
    }

    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.errors().map(|(name, _)| name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationResult)> {
        self.results.iter().map(|(name, r)| (*name, r))
    }
}

/// Evaluate every field of `schema` against `values`.
///
/// Rules run in declared order and the first failure wins. Fields missing from
/// `values` are evaluated as empty text.
#[must_use]
pub fn validate(schema: &FormSchema, values: &FormValues) -> ValidationReport {
    let results = schema
        .fields()
        .iter()
        .map(|field| (field.name, validate_field(field, values)))
        .collect();
    ValidationReport { results }
}

#[must_use]
pub fn validate_field(field: &FieldSchema, values: &FormValues) -> ValidationResult {
    let value = values.get(field.name);
    field
        .rules
        .iter()
        .find(|rule| !rule.check(value, values))
        .map_or_else(ValidationResult::ok, |rule| ValidationResult::error(rule.message()))
}

/// True iff every field passes all of its rules.
#[must_use]
pub fn is_form_valid(schema: &FormSchema, values: &FormValues) -> bool {
    schema
        .fields()
        .iter()
        .all(|field| validate_field(field, values).valid)
}
