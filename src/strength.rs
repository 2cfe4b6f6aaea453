//! Live password strength feedback.
//!
//! DESIGN
//! ======
//! The four checks are evaluated independently and always together so the UI
//! can show every indicator at once. They overlap with the sign-up password
//! rules but never gate submission; gating belongs to the schema.

#[cfg(test)]
#[path = "strength_test.rs"]
mod strength_test;

use crate::config::DEFAULT_PASSWORD_MIN_LEN;
use crate::rules::{char_len, contains_email, has_ascii_digit, has_ascii_letter, has_ascii_uppercase};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrengthReport {
    /// The password does not contain the email address.
    pub no_email: bool,
    pub min_length: bool,
    /// At least one digit and at least one letter.
    pub digit_and_letter: bool,
    pub has_uppercase: bool,
}

/// One labelled indicator for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthCheck {
    pub label: String,
    pub passed: bool,
}

impl PasswordStrengthReport {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.no_email && self.min_length && self.digit_and_letter && self.has_uppercase
    }

    /// Indicators in display order.
    #[must_use]
    pub fn checks(&self, min_len: usize) -> [StrengthCheck; 4] {
        [
            StrengthCheck {
                label: "Can't contain an e-mail address".to_owned(),
                passed: self.no_email,
            },
            StrengthCheck {
                label: format!("At least {min_len} characters"),
                passed: self.min_length,
            },
            StrengthCheck {
                label: "Contains a number (and) symbol".to_owned(),
                passed: self.digit_and_letter,
            },
            StrengthCheck {
                label: "One or more capitalized letter".to_owned(),
                passed: self.has_uppercase,
            },
        ]
    }
}

/// Evaluate `password` against the default minimum length.
#[must_use]
pub fn strength_report(password: &str, email: &str) -> PasswordStrengthReport {
    strength_report_with_min(password, email, DEFAULT_PASSWORD_MIN_LEN)
}

#[must_use]
pub fn strength_report_with_min(password: &str, email: &str, min_len: usize) -> PasswordStrengthReport {
    PasswordStrengthReport {
        no_email: !contains_email(password, email),
        min_length: char_len(password) >= min_len,
        digit_and_letter: has_ascii_digit(password) && has_ascii_letter(password),
        has_uppercase: has_ascii_uppercase(password),
    }
}
