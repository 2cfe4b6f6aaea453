//! Client-side authentication forms: login, sign-up, and the page that toggles
//! between them.
//!
//! This crate is UI-framework agnostic. It owns the declarative field schemas,
//! the validation engine, the live password strength checks, the password
//! generator, and the per-form session state machines. The `client` crate
//! renders these with Leptos.
//!
//! ARCHITECTURE
//! ============
//! `schema` + `rules` describe what a valid form looks like, `engine` evaluates
//! a schema against current values, and `controller` binds values, validity and
//! submission together for one form session. Nothing here performs I/O; a
//! validated payload is handed to a [`submit::Submitter`].

pub mod config;
pub mod controller;
pub mod engine;
pub mod generator;
pub mod page;
pub mod rules;
pub mod schema;
pub mod strength;
pub mod submit;
pub mod values;

pub use config::FormConfig;
pub use controller::login::LoginForm;
pub use controller::signup::{PasswordAffordance, SignupForm};
pub use controller::{FormError, FormSession, RevealMode, SessionState};
pub use engine::{ValidationReport, ValidationResult, is_form_valid, validate};
pub use generator::{GeneratorError, generate};
pub use page::{ActiveForm, AuthPage};
pub use schema::{FieldKind, FieldSchema, FormKind, FormSchema, Rule, fields};
pub use strength::{PasswordStrengthReport, StrengthCheck, strength_report};
pub use submit::{LogSubmitter, SubmissionPayload, Submitter};
pub use values::{FieldValue, FormValues};
