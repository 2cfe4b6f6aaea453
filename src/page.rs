//! Auth page state: which form is showing and its live session.
//!
//! The page opens on sign-up. Switching forms discards the current session
//! and its values; selecting the form already shown keeps them.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::sync::Arc;

use crate::config::FormConfig;
use crate::controller::login::LoginForm;
use crate::controller::signup::SignupForm;
use crate::controller::{FormError, FormSession};
use crate::schema::{FormKind, FormSchema};
use crate::submit::Submitter;

#[derive(Clone, Debug)]
pub enum ActiveForm {
    Login(LoginForm),
    SignUp(SignupForm),
}

#[derive(Clone, Debug)]
pub struct AuthPage {
    config: FormConfig,
    login_schema: Arc<FormSchema>,
    signup_schema: Arc<FormSchema>,
    active: ActiveForm,
}

impl Default for AuthPage {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl AuthPage {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        let login_schema = FormSchema::login();
        let signup_schema = FormSchema::signup_for(&config);
        let active = ActiveForm::SignUp(SignupForm::with_schema(Arc::clone(&signup_schema), config));
        Self {
            config,
            login_schema,
            signup_schema,
            active,
        }
    }

    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> FormKind {
        match self.active {
            ActiveForm::Login(_) => FormKind::Login,
            ActiveForm::SignUp(_) => FormKind::SignUp,
        }
    }

    #[must_use]
    pub fn active(&self) -> &ActiveForm {
        &self.active
    }

    /// Switch forms. `None` (a deselected toggle) is ignored.
    ///
    /// Returns true when a new session was opened.
    pub fn select(&mut self, mode: Option<FormKind>) -> bool {
        let Some(mode) = mode else {
            return false;
        };
        if mode == self.mode() {
            return false;
        }
        tracing::debug!(from = self.mode().as_str(), to = mode.as_str(), "switching auth form");
        self.active = self.fresh(mode);
        true
    }

    /// Replace the current session with an empty one of the same kind.
    pub fn restart(&mut self) {
        self.active = self.fresh(self.mode());
    }

    fn fresh(&self, mode: FormKind) -> ActiveForm {
        match mode {
            FormKind::Login => ActiveForm::Login(LoginForm::with_schema(Arc::clone(&self.login_schema))),
            FormKind::SignUp => {
                ActiveForm::SignUp(SignupForm::with_schema(Arc::clone(&self.signup_schema), self.config))
            }
        }
    }

    #[must_use]
    pub fn session(&self) -> &FormSession {
        match &self.active {
            ActiveForm::Login(form) => form.session(),
            ActiveForm::SignUp(form) => form.session(),
        }
    }

    fn session_mut(&mut self) -> &mut FormSession {
        match &mut self.active {
            ActiveForm::Login(form) => form.session_mut(),
            ActiveForm::SignUp(form) => form.session_mut(),
        }
    }

    #[must_use]
    pub fn login(&self) -> Option<&LoginForm> {
        match &self.active {
            ActiveForm::Login(form) => Some(form),
            ActiveForm::SignUp(_) => None,
        }
    }

    #[must_use]
    pub fn signup(&self) -> Option<&SignupForm> {
        match &self.active {
            ActiveForm::SignUp(form) => Some(form),
            ActiveForm::Login(_) => None,
        }
    }

    pub fn signup_mut(&mut self) -> Option<&mut SignupForm> {
        match &mut self.active {
            ActiveForm::SignUp(form) => Some(form),
            ActiveForm::Login(_) => None,
        }
    }

    /// Set a text field on whichever form is showing.
    ///
    /// # Errors
    ///
    /// See [`FormSession::set`].
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.session_mut().set_text(field, value)
    }

    /// Set a checkbox field on whichever form is showing.
    ///
    /// # Errors
    ///
    /// See [`FormSession::set`].
    pub fn set_flag(&mut self, field: &str, value: bool) -> Result<(), FormError> {
        self.session_mut().set_flag(field, value)
    }

    /// Submit the form that is showing.
    ///
    /// # Errors
    ///
    /// See [`FormSession::submit`].
    pub fn submit<S>(&mut self, submitter: &mut S) -> Result<(), FormError>
    where
        S: Submitter + ?Sized,
    {
        match &mut self.active {
            ActiveForm::Login(form) => form.submit(submitter),
            ActiveForm::SignUp(form) => form.submit(submitter),
        }
    }
}
