//! Stable identifiers for validators.

use std::borrow::Cow;
use std::fmt;

/// Identifies a validator within a field, and addresses its result in an
/// [`ErrorState`](super::ErrorState).
///
/// Built-in validators use the associated constants. Custom validators pick
/// their own name with [`ValidatorKind::custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatorKind(Cow<'static, str>);

impl ValidatorKind {
    pub const REQUIRED: Self = Self(Cow::Borrowed("required"));
    pub const EMAIL: Self = Self(Cow::Borrowed("email"));
    pub const NOT_BLANK: Self = Self(Cow::Borrowed("not_blank"));
    pub const MIN_LENGTH: Self = Self(Cow::Borrowed("min_length"));
    pub const MAX_LENGTH: Self = Self(Cow::Borrowed("max_length"));
    pub const PATTERN: Self = Self(Cow::Borrowed("pattern"));
    pub const CONTAINS: Self = Self(Cow::Borrowed("contains"));
    pub const CHECKED: Self = Self(Cow::Borrowed("checked"));
    pub const RANGE: Self = Self(Cow::Borrowed("range"));

    /// Create a kind for a custom validator.
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The kind's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidatorKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for ValidatorKind {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for ValidatorKind {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl PartialEq<str> for ValidatorKind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ValidatorKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
