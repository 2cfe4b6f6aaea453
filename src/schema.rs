//! Declarative field schemas for the login and sign-up forms.
//!
//! DESIGN
//! ======
//! A schema is an ordered list of fields, each with an ordered list of
//! `(predicate, message)` rules. Schemas are immutable and shared through
//! `Arc` so every form session reuses the instance built at startup.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::config::{DEFAULT_PASSWORD_MIN_LEN, FormConfig};
use crate::rules;
use crate::values::{FieldValue, FormValues};

/// Field names as they appear in the submitted payload.
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";
    pub const REFERRAL_CODE: &str = "referralCode";
    pub const ACCEPT_TERMS: &str = "acceptTerms";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    #[default]
    SignUp,
}

impl FormKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::SignUp => "signup",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Password,
    Boolean,
}

impl FieldKind {
    /// Value a fresh session starts with.
    #[must_use]
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::Boolean => FieldValue::Flag(false),
            Self::Text | Self::Email | Self::Phone | Self::Password => FieldValue::Text(String::new()),
        }
    }

    #[must_use]
    pub fn accepts(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Boolean, FieldValue::Flag(_))
                | (Self::Text | Self::Email | Self::Phone | Self::Password, FieldValue::Text(_))
        )
    }

    /// Values of this kind are redacted from logs.
    #[must_use]
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

type Predicate = dyn Fn(&FieldValue, &FormValues) -> bool + Send + Sync;

/// A single check with the message reported when it fails.
///
/// The predicate receives the field's own value and the whole form; only the
/// password rule that rejects the email address looks at another field.
#[derive(Clone)]
pub struct Rule {
    predicate: Arc<Predicate>,
    message: String,
}

impl Rule {
    pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Rule over the field's text only.
    pub fn text<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(message, move |value, _| predicate(value.as_text()))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn check(&self, value: &FieldValue, form: &FormValues) -> bool {
        (self.predicate)(value, form)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    #[must_use]
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

#[derive(Clone, Debug)]
pub struct FormSchema {
    kind: FormKind,
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    #[must_use]
    pub fn new(kind: FormKind, fields: Vec<FieldSchema>) -> Self {
        Self { kind, fields }
    }

    /// Shared login schema.
    #[must_use]
    pub fn login() -> Arc<Self> {
        Arc::clone(&LOGIN)
    }

    /// Shared sign-up schema with the default password policy.
    #[must_use]
    pub fn signup() -> Arc<Self> {
        Arc::clone(&SIGNUP)
    }

    /// Sign-up schema for a configured policy. Reuses the shared instance when
    /// the policy matches the default.
    #[must_use]
    pub fn signup_for(config: &FormConfig) -> Arc<Self> {
        if config.password_min_len == DEFAULT_PASSWORD_MIN_LEN {
            Self::signup()
        } else {
            Arc::new(build_signup(config.password_min_len))
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Starting values for a new session.
    #[must_use]
    pub fn default_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name, f.kind.default_value()))
            .collect()
    }
}

static LOGIN: LazyLock<Arc<FormSchema>> = LazyLock::new(|| Arc::new(build_login()));
static SIGNUP: LazyLock<Arc<FormSchema>> = LazyLock::new(|| Arc::new(build_signup(DEFAULT_PASSWORD_MIN_LEN)));

fn email_field() -> FieldSchema {
    FieldSchema::new(fields::EMAIL, "E-mail", FieldKind::Email)
        .rule(Rule::text("E-mail is required", |v| !v.is_empty()))
        .rule(Rule::text("Enter a valid e-mail address", rules::is_email))
}

fn build_login() -> FormSchema {
    FormSchema::new(
        FormKind::Login,
        vec![
            email_field(),
            FieldSchema::new(fields::PASSWORD, "Password", FieldKind::Password)
                .rule(Rule::text("Password is required", |v| !v.is_empty())),
        ],
    )
}

fn build_signup(min_len: usize) -> FormSchema {
    let password = FieldSchema::new(fields::PASSWORD, "Password", FieldKind::Password)
        .rule(Rule::text(
            format!("Password must be at least {min_len} characters"),
            move |v| rules::char_len(v) >= min_len,
        ))
        .rule(Rule::text("Password must contain a number", rules::has_ascii_digit))
        .rule(Rule::text(
            "Password must contain an uppercase letter",
            rules::has_ascii_uppercase,
        ))
        .rule(Rule::new("Password can't contain your e-mail address", |value, form| {
            !rules::contains_email(value.as_text(), form.text(fields::EMAIL))
        }));

    FormSchema::new(
        FormKind::SignUp,
        vec![
            email_field(),
            FieldSchema::new(fields::PHONE, "Phone number", FieldKind::Phone)
                .rule(Rule::text("Phone number is required", |v| !v.is_empty()))
                .rule(Rule::text("Enter a valid international phone number", rules::is_phone)),
            password,
            FieldSchema::new(fields::REFERRAL_CODE, "Referral code", FieldKind::Text).rule(Rule::text(
                format!(
                    "Referral code must be {}-{} letters or digits",
                    rules::REFERRAL_CODE_MIN_LEN,
                    rules::REFERRAL_CODE_MAX_LEN
                ),
                |v| v.is_empty() || rules::is_referral_code(v),
            )),
            FieldSchema::new(fields::ACCEPT_TERMS, "Accept terms", FieldKind::Boolean).rule(Rule::new(
                "You must accept the terms and conditions",
                |value, _| value.as_flag(),
            )),
        ],
    )
}
