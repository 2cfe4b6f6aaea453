//! Field grammars used by the form schemas.
//!
//! Each check is a plain predicate over a single string so schemas can compose
//! them with their own error messages.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

pub const REFERRAL_CODE_MIN_LEN: usize = 4;
pub const REFERRAL_CODE_MAX_LEN: usize = 16;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern compiles"));

// E.164: optional `+`, no leading zero, 8 to 15 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{7,14}$").expect("phone pattern compiles"));

static REFERRAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Za-z0-9]{{{REFERRAL_CODE_MIN_LEN},{REFERRAL_CODE_MAX_LEN}}}$"))
        .expect("referral code pattern compiles")
});

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// International phone number. Spaces, dashes, dots and parentheses are
/// accepted as separators.
#[must_use]
pub fn is_phone(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&compact)
}

/// Alphanumeric referral code of bounded length.
#[must_use]
pub fn is_referral_code(value: &str) -> bool {
    REFERRAL_CODE_RE.is_match(value)
}

#[must_use]
pub fn has_ascii_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

#[must_use]
pub fn has_ascii_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic())
}

#[must_use]
pub fn has_ascii_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

/// Length in characters, not bytes.
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// True when `email` is non-empty and appears verbatim inside `password`.
#[must_use]
pub fn contains_email(password: &str, email: &str) -> bool {
    !email.is_empty() && password.contains(email)
}
