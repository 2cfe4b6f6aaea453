//! Hand-off point between a validated form and whatever sends it.
//!
//! The core never performs I/O. A [`Submitter`] receives the validated
//! payload; transport, retries and backend errors are its concern.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::schema::{FormKind, FormSchema};
use crate::values::{FieldValue, FormValues};

const REDACTED: &str = "[redacted]";

/// Validated field values keyed by field name.
///
/// Serializes as a flat JSON object, e.g.
/// `{"email": "...", "acceptTerms": true}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    #[serde(skip)]
    form: FormKind,
    #[serde(flatten)]
    values: BTreeMap<&'static str, FieldValue>,
    #[serde(skip)]
    secret: Vec<&'static str>,
}

impl SubmissionPayload {
    /// Snapshot the schema's fields from `values`.
    #[must_use]
    pub fn from_form(schema: &FormSchema, values: &FormValues) -> Self {
        let mut payload = BTreeMap::new();
        let mut secret = Vec::new();
        for field in schema.fields() {
            payload.insert(field.name, values.get(field.name).clone());
            if field.kind.is_secret() {
                secret.push(field.name);
            }
        }
        Self {
            form: schema.kind(),
            values: payload,
            secret,
        }
    }

    #[must_use]
    pub fn form(&self) -> FormKind {
        self.form
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// JSON with secret fields masked, safe to log.
    #[must_use]
    pub fn to_redacted_json(&self) -> Value {
        let mut json = self.to_json();
        if let Value::Object(map) = &mut json {
            for name in &self.secret {
                if let Some(v) = map.get_mut(*name) {
                    *v = Value::String(REDACTED.to_owned());
                }
            }
        }
        json
    }
}

/// Receives a validated payload on submit.
pub trait Submitter {
    fn submit(&mut self, payload: SubmissionPayload);
}

impl<F> Submitter for F
where
    F: FnMut(SubmissionPayload),
{
    fn submit(&mut self, payload: SubmissionPayload) {
        self(payload);
    }
}

/// Logs the payload and drops it. Stand-in until a backend exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&mut self, payload: SubmissionPayload) {
        tracing::info!(
            form = payload.form().as_str(),
            payload = %payload.to_redacted_json(),
            "form submitted"
        );
    }
}
