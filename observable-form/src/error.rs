//! Configuration and lookup errors.
//!
//! A validator rejecting a value is not an error; it shows up in
//! [`ErrorState`](crate::validation::ErrorState). The types here cover
//! mistakes made while wiring fields and forms together.

use thiserror::Error;

use crate::validation::ValidatorKind;

/// Errors raised while constructing a field, validator or form.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two validators with the same kind were attached to one field.
    #[error("Validator '{kind}' is attached more than once")]
    DuplicateValidator {
        /// The repeated kind.
        kind: ValidatorKind,
    },

    /// Two form members were declared under the same name.
    #[error("Form member '{name}' is declared more than once")]
    DuplicateMember {
        /// The repeated member name.
        name: String,
    },

    /// A `pattern` validator was given a regex that does not compile.
    #[error("Invalid validation pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// Creates a duplicate validator error.
    pub fn duplicate_validator(kind: ValidatorKind) -> Self {
        Self::DuplicateValidator { kind }
    }

    /// Creates a duplicate member error.
    pub fn duplicate_member(name: impl Into<String>) -> Self {
        Self::DuplicateMember { name: name.into() }
    }
}

/// Error type for typed member access on a [`Form`](crate::form::Form).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    /// The form has no member with this name.
    #[error("Member '{name}' not found in form")]
    Missing { name: String },

    /// The member exists but holds a different value type.
    #[error("Member '{name}' type mismatch: expected Field<{expected}>")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },
}

impl MemberError {
    /// Creates a new missing member error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(name: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
        }
    }
}
