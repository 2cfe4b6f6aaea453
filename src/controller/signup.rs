//! Sign-up form controller.
//!
//! Adds the password field affordances on top of a [`FormSession`]:
//! visibility toggle, live strength report, and one-click generation while the
//! password is still empty.
//!
//! A generated password is revealed in plaintext (unless configured off) and
//! stays visible until the user toggles it back.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::Arc;

use rand::Rng;

use super::{FormError, FormSession, RevealMode, SessionState};
use crate::config::FormConfig;
use crate::generator;
use crate::schema::{FormSchema, fields};
use crate::strength::{PasswordStrengthReport, StrengthCheck, strength_report_with_min};
use crate::submit::Submitter;

/// What the password field offers next to the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordAffordance {
    Generate,
    ToggleVisibility,
}

#[derive(Clone, Debug)]
pub struct SignupForm {
    session: FormSession,
    config: FormConfig,
    password_visible: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl SignupForm {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self::with_schema(FormSchema::signup_for(&config), config)
    }

    /// Session over an already built schema, so a page can share one
    /// instance across sessions.
    #[must_use]
    pub fn with_schema(schema: Arc<FormSchema>, config: FormConfig) -> Self {
        Self {
            session: FormSession::new(schema, RevealMode::OnChange),
            config,
            password_visible: false,
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
    pub fn config(&self) -> &FormConfig {
        &self.config
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
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), FormError> {
        self.session.set_text(fields::PHONE, phone)
    }

    /// # Errors
    ///
    /// [`FormError::SessionClosed`] after submit.
    pub fn set_password(&mut self, password: impl Into<String>) -> Result<(), FormError> {
        self.session.set_text(fields::PASSWORD, password)
    }

    /// # Errors
    ///
    /// [`FormError::SessionClosed`] after submit.
    pub fn set_referral_code(&mut self, code: impl Into<String>) -> Result<(), FormError> {
        self.session.set_text(fields::REFERRAL_CODE, code)
    }

    /// # Errors
    ///
    /// [`FormError::SessionClosed`] after submit.
    pub fn set_accept_terms(&mut self, accepted: bool) -> Result<(), FormError> {
        self.session.set_flag(fields::ACCEPT_TERMS, accepted)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn strength(&self) -> PasswordStrengthReport {
        strength_report_with_min(
            self.password(),
            self.session.text(fields::EMAIL),
            self.config.password_min_len,
        )
    }

    /// Strength indicators labelled for the configured minimum length.
    #[must_use]
    pub fn strength_checks(&self) -> [StrengthCheck; 4] {
        self.strength().checks(self.config.password_min_len)
    }

    #[must_use]
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    #[must_use]
    pub fn can_generate_password(&self) -> bool {
        self.session.state() != SessionState::Submitted && self.password().is_empty()
    }

    #[must_use]
    pub fn password_affordance(&self) -> PasswordAffordance {
        if self.password().is_empty() {
            PasswordAffordance::Generate
        } else {
            PasswordAffordance::ToggleVisibility
        }
    }

    /// Fill the empty password field with a generated password.
    ///
    /// # Errors
    ///
    /// [`FormError::GenerateUnavailable`] when the field already has a value,
    /// [`FormError::SessionClosed`] after submit, and
    /// [`FormError::Generator`] when the configured length is too short.
    pub fn generate_password<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&str, FormError> {
        if self.session.state() == SessionState::Submitted {
            return Err(FormError::SessionClosed);
        }
        if !self.password().is_empty() {
            return Err(FormError::GenerateUnavailable);
        }

        let password = generator::generate(rng, self.config.generated_password_len)?;
        self.session.set_text(fields::PASSWORD, password)?;
        if self.config.reveal_generated_password {
            self.password_visible = true;
        }
        tracing::debug!(length = self.config.generated_password_len, "generated sign-up password");
        Ok(self.password())
    }

    /// # Errors
    ///
    /// See [`FormSession::submit`].
    pub fn submit<S>(&mut self, submitter: &mut S) -> Result<(), FormError>
    where
        S: Submitter + ?Sized,
    {
        self.session.submit(submitter)?;
        self.password_visible = false;
        Ok(())
    }
}
