//! Form sessions: live values bound to a schema.
//!
//! ARCHITECTURE
//! ============
//! [`FormSession`] is the shared state machine used by both forms:
//!
//! ```text
//! Editing --(all fields valid)--> Submittable --(submit)--> Submitted
//!    ^                                 |
//!    +------------(edit breaks a rule)-+
//! ```
//!
//! `Submitted` is terminal; a new session is needed for another attempt.
//! Validity is derived from the current values on every read. `login` and
//! `signup` wrap a session with the per-form affordances.

pub mod login;
pub mod signup;


use std::collections::BTreeSet;
use std::sync::Arc;

use crate::engine::{self, ValidationReport, ValidationResult};
use crate::generator::GeneratorError;
use crate::schema::{FormKind, FormSchema};
use crate::submit::{SubmissionPayload, Submitter};
use crate::values::{FieldValue, FormValues};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{field}` for {form} form")]
    UnknownField { form: &'static str, field: String },
    #[error("field `{field}` does not accept this kind of value")]
    KindMismatch { field: &'static str },
    #[error("form is not valid: {}", .fields.join(", "))]
    NotSubmittable { fields: Vec<&'static str> },
    #[error("form session already submitted")]
    SessionClosed,
    #[error("password generation is only offered while the password is empty")]
    GenerateUnavailable,
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Submittable,
    Submitted,
}

/// When field errors become visible to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// A field shows its error once the user has edited it.
    #[default]
    OnChange,
    /// Errors stay hidden until the first submit attempt, then update live.
    OnSubmit,
}

#[derive(Clone, Debug)]
pub struct FormSession {
    schema: Arc<FormSchema>,
    values: FormValues,
    reveal: RevealMode,
    touched: BTreeSet<&'static str>,
    submit_attempted: bool,
    submitted: bool,
}

impl FormSession {
    #[must_use]
    pub fn new(schema: Arc<FormSchema>, reveal: RevealMode) -> Self {
        let values = schema.default_values();
        Self {
            schema,
            values,
            reveal,
            touched: BTreeSet::new(),
            submit_attempted: false,
            submitted: false,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.schema.kind()
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, field: &str) -> &FieldValue {
        self.values.get(field)
    }

    #[must_use]
    pub fn text(&self, field: &str) -> &str {
        self.values.text(field)
    }

    #[must_use]
    pub fn flag(&self, field: &str) -> bool {
        self.values.flag(field)
    }

    /// Replace a field's value.
    ///
    /// # Errors
    ///
    /// [`FormError::SessionClosed`] after submit, [`FormError::UnknownField`]
    /// for names outside the schema, [`FormError::KindMismatch`] when the value
    /// kind does not fit the field.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        if self.submitted {
            return Err(FormError::SessionClosed);
        }
        let schema = self.schema.field(field).ok_or_else(|| FormError::UnknownField {
            form: self.schema.kind().as_str(),
            field: field.to_owned(),
        })?;
        let value = value.into();
        if !schema.kind.accepts(&value) {
            return Err(FormError::KindMismatch { field: schema.name });
        }
        let name = schema.name;
        self.values.set(name, value);
        self.touched.insert(name);
        Ok(())
    }

    /// Set a text field.
    ///
    /// # Errors
    ///
    /// See [`FormSession::set`].
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.set(field, FieldValue::Text(value.into()))
    }

    /// Set a checkbox field.
    ///
    /// # Errors
    ///
    /// See [`FormSession::set`].
    pub fn set_flag(&mut self, field: &str, value: bool) -> Result<(), FormError> {
        self.set(field, FieldValue::Flag(value))
    }

    /// Fresh evaluation of every field.
    #[must_use]
    pub fn report(&self) -> ValidationReport {
        engine::validate(&self.schema, &self.values)
    }

    #[must_use]
    pub fn result(&self, field: &str) -> Option<ValidationResult> {
        self.schema
            .field(field)
            .map(|f| engine::validate_field(f, &self.values))
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        engine::is_form_valid(&self.schema, &self.values)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.submitted {
            SessionState::Submitted
        } else if self.is_valid() {
            SessionState::Submittable
        } else {
            SessionState::Editing
        }
    }

    #[must_use]
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    #[must_use]
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Error to show for `field` under the session's reveal mode.
    #[must_use]
    pub fn visible_error(&self, field: &str) -> Option<String> {
        if self.submitted {
            return None;
        }
        let revealed = self.submit_attempted || (self.reveal == RevealMode::OnChange && self.is_touched(field));
        if !revealed {
            return None;
        }
        self.result(field).and_then(|r| r.message)
    }

    /// Hand the validated values to `submitter` and close the session.
    ///
    /// # Errors
    ///
    /// [`FormError::SessionClosed`] if already submitted;
    /// [`FormError::NotSubmittable`] while any field fails, in which case all
    /// errors become visible.
    pub fn submit<S>(&mut self, submitter: &mut S) -> Result<(), FormError>
    where
        S: Submitter + ?Sized,
    {
        if self.submitted {
            return Err(FormError::SessionClosed);
        }
        self.submit_attempted = true;

        let report = self.report();
        if !report.is_valid() {
            let fields = report.invalid_fields();
            tracing::debug!(form = self.kind().as_str(), ?fields, "submit blocked by validation");
            return Err(FormError::NotSubmittable { fields });
        }

        let payload = SubmissionPayload::from_form(&self.schema, &self.values);
        submitter.submit(payload);

        self.values = self.schema.default_values();
        self.touched.clear();
        self.submitted = true;
        tracing::info!(form = self.kind().as_str(), "form session submitted");
        Ok(())
    }
}
