//! Validators: named, pure predicates over a field value.

use std::fmt;
use std::sync::Arc;

use email_address::{EmailAddress, Options};
use regex::Regex;

use super::ValidatorKind;
use crate::error::ConfigError;

/// Type alias for the shared predicate closure.
type Predicate<V> = Arc<dyn Fn(&V) -> bool + Send + Sync>;

/// A single validation rule.
///
/// A validator pairs a [`ValidatorKind`] with a predicate that returns
/// `true` when the value is acceptable. Predicates must be total: every
/// representable value is an ordinary input, never an error condition.
///
/// Validators are immutable and cheap to clone, so one built-in instance
/// can be shared between fields.
///
/// # Example
///
/// ```ignore
/// let email = Field::new(
///     String::new(),
///     [Validator::required(), Validator::email()],
/// )?;
///
/// let even = Validator::custom("even", |v: &i64| v % 2 == 0);
/// ```
pub struct Validator<V> {
    kind: ValidatorKind,
    predicate: Predicate<V>,
}

impl<V> Validator<V> {
    /// The kind this validator reports under.
    pub fn kind(&self) -> &ValidatorKind {
        &self.kind
    }

    /// Returns `true` if `value` satisfies this rule.
    pub fn evaluate(&self, value: &V) -> bool {
        (self.predicate)(value)
    }
}

impl<V: 'static> Validator<V> {
    /// Create a validator from a kind and predicate.
    pub fn new<F>(kind: impl Into<ValidatorKind>, predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: kind.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Create a validator with a custom kind name.
    pub fn custom<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self::new(ValidatorKind::custom(name.into()), predicate)
    }
}

impl<V> Clone for Validator<V> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<V> fmt::Debug for Validator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Values that have an "empty" representation.
///
/// Used by [`Validator::required`].
pub trait Blank {
    /// Returns `true` if this is the type's empty value.
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl<T> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<V: Blank + 'static> Validator<V> {
    /// Fails if the value is empty.
    pub fn required() -> Self {
        Self::new(ValidatorKind::REQUIRED, |v: &V| !v.is_blank())
    }
}

/// Plain addresses only, with at least one dot in the domain.
fn email_options() -> Options {
    Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld()
}

// Built-in rules for string values
impl<V: AsRef<str> + 'static> Validator<V> {
    /// Fails unless the value is a syntactically valid email address.
    ///
    /// Only a bare `local@domain` address passes: display text such as
    /// `Ada <ada@example.com>`, bracketed domain literals and domains without
    /// a dot are rejected. An empty string is not a valid address, whether or
    /// not `required` is also attached.
    pub fn email() -> Self {
        Self::new(ValidatorKind::EMAIL, |v: &V| {
            EmailAddress::parse_with_options(v.as_ref(), email_options()).is_ok()
        })
    }

    /// Fails if the value is empty or only whitespace.
    pub fn not_blank() -> Self {
        Self::new(ValidatorKind::NOT_BLANK, |v: &V| !v.as_ref().trim().is_empty())
    }

    /// Fails if the value has fewer than `min` characters.
    pub fn min_length(min: usize) -> Self {
        Self::new(ValidatorKind::MIN_LENGTH, move |v: &V| {
            v.as_ref().chars().count() >= min
        })
    }

    /// Fails if the value has more than `max` characters.
    pub fn max_length(max: usize) -> Self {
        Self::new(ValidatorKind::MAX_LENGTH, move |v: &V| {
            v.as_ref().chars().count() <= max
        })
    }

    /// Fails unless the value matches `pattern` somewhere.
    ///
    /// Anchor the pattern with `^...$` to require a full match.
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        let re = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::new(ValidatorKind::PATTERN, move |v: &V| {
            re.is_match(v.as_ref())
        }))
    }

    /// Fails unless the value contains `substr`.
    pub fn contains(substr: impl Into<String>) -> Self {
        let substr = substr.into();
        Self::new(ValidatorKind::CONTAINS, move |v: &V| {
            v.as_ref().contains(substr.as_str())
        })
    }
}

impl Validator<bool> {
    /// Fails unless the value is `true`.
    pub fn checked() -> Self {
        Self::new(ValidatorKind::CHECKED, |&v: &bool| v)
    }
}

impl<V: PartialOrd + Send + Sync + 'static> Validator<V> {
    /// Fails unless `min <= value <= max`.
    pub fn range(min: V, max: V) -> Self {
        Self::new(ValidatorKind::RANGE, move |v: &V| *v >= min && *v <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_strings() {
        let required = Validator::<String>::required();
        assert!(!required.evaluate(&String::new()));
        assert!(required.evaluate(&" ".to_string()));
        assert!(required.evaluate(&"a".to_string()));
    }

    #[test]
    fn test_required_other_types() {
        assert!(!Validator::<Option<u8>>::required().evaluate(&None));
        assert!(Validator::<Option<u8>>::required().evaluate(&Some(0)));
        assert!(!Validator::<Vec<u8>>::required().evaluate(&Vec::new()));
        assert!(!Validator::<bool>::required().evaluate(&false));
        assert!(Validator::<&'static str>::required().evaluate(&"x"));
    }

    #[test]
    fn test_email() {
        let email = Validator::<String>::email();
        assert!(!email.evaluate(&String::new()));
        assert!(!email.evaluate(&"test".to_string()));
        assert!(!email.evaluate(&"@gmail.com".to_string()));
        assert!(email.evaluate(&"test@gmail.com".to_string()));
    }

    #[test]
    fn test_email_rejects_mailbox_forms() {
        let email = Validator::<String>::email();
        assert!(!email.evaluate(&"Ada <ada@example.com>".to_string()));
        assert!(!email.evaluate(&"ada@[127.0.0.1]".to_string()));
        assert!(!email.evaluate(&"a@b".to_string()));
        assert!(email.evaluate(&"a@b.co".to_string()));
    }

    #[test]
    fn test_not_blank() {
        let not_blank = Validator::<String>::not_blank();
        assert!(!not_blank.evaluate(&"   ".to_string()));
        assert!(not_blank.evaluate(&" x ".to_string()));
    }

    #[test]
    fn test_lengths_count_chars() {
        let min = Validator::<String>::min_length(3);
        let max = Validator::<String>::max_length(3);
        assert!(min.evaluate(&"héé".to_string()));
        assert!(max.evaluate(&"héé".to_string()));
        assert!(!min.evaluate(&"hé".to_string()));
        assert!(!max.evaluate(&"héél".to_string()));
    }

    #[test]
    fn test_pattern() {
        let digits = Validator::<String>::pattern(r"^\d+$").unwrap();
        assert_eq!(digits.kind(), &ValidatorKind::PATTERN);
        assert!(digits.evaluate(&"123".to_string()));
        assert!(!digits.evaluate(&"12a".to_string()));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Validator::<String>::pattern("(").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_range_and_checked() {
        let range = Validator::range(1, 10);
        assert!(range.evaluate(&1));
        assert!(range.evaluate(&10));
        assert!(!range.evaluate(&11));

        assert!(Validator::checked().evaluate(&true));
        assert!(!Validator::checked().evaluate(&false));
    }

    #[test]
    fn test_custom_kind() {
        let even = Validator::custom("even", |v: &i64| v % 2 == 0);
        assert_eq!(even.kind().as_str(), "even");
        assert!(even.evaluate(&4));
        assert!(!even.evaluate(&3));
    }
}
