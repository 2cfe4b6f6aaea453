//! Form policy parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::generator::MIN_GENERATED_LEN;

pub const DEFAULT_PASSWORD_MIN_LEN: usize = 8;
pub const DEFAULT_GENERATED_PASSWORD_LEN: usize = 12;
pub const DEFAULT_REVEAL_GENERATED_PASSWORD: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Minimum sign-up password length, enforced by the schema and shown by
    /// the strength checklist.
    pub password_min_len: usize,
    /// Length requested from the generator. Always at least
    /// `password_min_len` and [`MIN_GENERATED_LEN`].
    pub generated_password_len: usize,
    /// Show a freshly generated password in plaintext.
    pub reveal_generated_password: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            password_min_len: DEFAULT_PASSWORD_MIN_LEN,
            generated_password_len: DEFAULT_GENERATED_PASSWORD_LEN,
            reveal_generated_password: DEFAULT_REVEAL_GENERATED_PASSWORD,
        }
    }
}

impl FormConfig {
    /// Build form policy from environment variables.
    ///
    /// Optional:
    /// - `AUTH_PASSWORD_MIN_LEN`: default 8
    /// - `AUTH_GENERATED_PASSWORD_LEN`: default 12
    /// - `AUTH_REVEAL_GENERATED_PASSWORD`: `true` (default) or `false`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FormConfig::from_env`] with an injectable variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            password_min_len: parse_or(&lookup, "AUTH_PASSWORD_MIN_LEN", DEFAULT_PASSWORD_MIN_LEN),
            generated_password_len: parse_or(&lookup, "AUTH_GENERATED_PASSWORD_LEN", DEFAULT_GENERATED_PASSWORD_LEN),
            reveal_generated_password: parse_or(
                &lookup,
                "AUTH_REVEAL_GENERATED_PASSWORD",
                DEFAULT_REVEAL_GENERATED_PASSWORD,
            ),
        };
        config.normalized()
    }

    /// Raise the generated length so generated passwords always pass the
    /// sign-up schema.
    #[must_use]
    pub fn normalized(self) -> Self {
        let floor = self.password_min_len.max(MIN_GENERATED_LEN);
        if self.generated_password_len >= floor {
            return self;
        }
        let generated_password_len = floor.max(DEFAULT_GENERATED_PASSWORD_LEN);
        tracing::warn!(
            requested = self.generated_password_len,
            using = generated_password_len,
            "generated password length below policy minimum"
        );
        Self { generated_password_len, ..self }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
