//! Live field values owned by a form session.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// Current input for one field.
///
/// Serializes untagged so a payload renders text fields as JSON strings and
/// checkboxes as JSON booleans.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Text content, or `""` for a flag.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Flag(_) => "",
        }
    }

    /// Flag state, or `false` for text.
    #[must_use]
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(_) => false,
        }
    }

    /// True for an empty text value. Flags are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

static EMPTY: FieldValue = FieldValue::Text(String::new());

/// Field name → value mapping for one form.
///
/// Lookups never fail: an absent field reads as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for tests and fixtures.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.values.insert(field.to_owned(), value.into());
    }

    /// Value for `field`, or an empty text value when absent.
    #[must_use]
    pub fn get(&self, field: &str) -> &FieldValue {
        self.values.get(field).unwrap_or(&EMPTY)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    #[must_use]
    pub fn text(&self, field: &str) -> &str {
        self.get(field).as_text()
    }

    #[must_use]
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).as_flag()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
