//! Login form controller.
//!
//! The password is only checked for presence; correctness is the backend's
//! call. Errors surface after the first submit attempt.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use super::{FormError, FormSession, RevealMode, SessionState};
use crate::schema::{FormSchema, fields};
use crate::submit::Submitter;

#[derive(Clone, Debug)]
pub struct LoginForm {
    session: FormSession,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::with_schema(FormSchema::login())
    }
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_schema(schema: Arc<FormSchema>) -> Self {
        Self {
            session: FormSession::new(schema, RevealMode::OnSubmit),
        }
    }

    #[must_use]
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.session.text(fields::EMAIL)
    }

    #[must_use]
    pub fn password(&self) -> &str {
        self.session.text(fields::PASSWORD)
    }

    /// # Errors
    ///
    /// [`FormError::SessionClosed`] after submit.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), FormError> {
        self.session.set_text(fields::EMAIL, email)
    }

    /// # Errors
    ///
    /// [`FormError::SessionClosed`] after submit.
    pub fn set_password(&mut self, password: impl Into<String>) -> Result<(), FormError> {
        self.session.set_text(fields::PASSWORD, password)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// # Errors
    ///
    /// See [`FormSession::submit`].
    pub fn submit<S>(&mut self, submitter: &mut S) -> Result<(), FormError>
    where
        S: Submitter + ?Sized,
    {
        self.session.submit(submitter)
    }
}
