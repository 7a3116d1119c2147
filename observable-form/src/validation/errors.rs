//! Per-validator pass/fail snapshot for a field value.

use std::ops::Index;

use super::{Validator, ValidatorKind};

/// Result of running every validator of a field against one value.
///
/// Holds exactly one entry per attached validator, in attachment order.
/// `true` means the validator currently rejects the value. Kinds that are
/// not attached read as not failing.
///
/// A new `ErrorState` is built on every value change; existing snapshots
/// are never modified, so they are safe to keep around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    entries: Vec<(ValidatorKind, bool)>,
}

impl ErrorState {
    /// Run every validator against `value`.
    ///
    /// All validators run; an earlier failure does not skip later ones.
    pub fn evaluate<V>(value: &V, validators: &[Validator<V>]) -> Self {
        let entries = validators
            .iter()
            .map(|validator| (validator.kind().clone(), !validator.evaluate(value)))
            .collect();
        Self { entries }
    }

    /// Whether the validator of this kind currently fails.
    pub fn get(&self, kind: &ValidatorKind) -> bool {
        self.lookup(kind.as_str()).unwrap_or(false)
    }

    /// Whether a validator of this kind was evaluated.
    pub fn contains(&self, kind: &ValidatorKind) -> bool {
        self.lookup(kind.as_str()).is_some()
    }

    /// `true` if no validator fails.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, failed)| !failed)
    }

    /// Kinds of the failing validators, in attachment order.
    pub fn failing(&self) -> impl Iterator<Item = &ValidatorKind> {
        self.entries
            .iter()
            .filter(|(_, failed)| *failed)
            .map(|(kind, _)| kind)
    }

    /// The first failing validator, if any.
    pub fn first_failure(&self) -> Option<&ValidatorKind> {
        self.failing().next()
    }

    /// All entries as `(kind, failed)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&ValidatorKind, bool)> {
        self.entries.iter().map(|(kind, failed)| (kind, *failed))
    }

    /// Number of evaluated validators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no validators were evaluated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, kind: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == kind)
            .map(|(_, failed)| *failed)
    }
}

impl Index<&ValidatorKind> for ErrorState {
    type Output = bool;

    fn index(&self, kind: &ValidatorKind) -> &bool {
        &self[kind.as_str()]
    }
}

impl Index<&str> for ErrorState {
    type Output = bool;

    fn index(&self, kind: &str) -> &bool {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == kind)
            .map(|(_, failed)| failed)
            .unwrap_or(&false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_validators() -> Vec<Validator<String>> {
        vec![Validator::required(), Validator::email()]
    }

    #[test]
    fn test_no_short_circuit() {
        let errors = ErrorState::evaluate(&String::new(), &string_validators());

        assert_eq!(errors.len(), 2);
        assert!(errors[&ValidatorKind::REQUIRED]);
        assert!(errors[&ValidatorKind::EMAIL]);
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_partial_failure() {
        let errors = ErrorState::evaluate(&"test".to_string(), &string_validators());

        assert!(!errors["required"]);
        assert!(errors["email"]);
        assert_eq!(errors.first_failure(), Some(&ValidatorKind::EMAIL));
    }

    #[test]
    fn test_absent_kind_is_not_failing() {
        let errors = ErrorState::evaluate(&String::new(), &string_validators());

        assert!(!errors[&ValidatorKind::MIN_LENGTH]);
        assert!(!errors.contains(&ValidatorKind::MIN_LENGTH));
        assert!(errors.contains(&ValidatorKind::EMAIL));
    }

    #[test]
    fn test_empty_validator_list_is_valid() {
        let errors = ErrorState::evaluate(&String::new(), &[]);
        assert!(errors.is_empty());
        assert!(errors.is_valid());
    }

    #[test]
    fn test_order_follows_attachment() {
        let validators = vec![
            Validator::email(),
            Validator::min_length(20),
            Validator::required(),
        ];
        let errors = ErrorState::evaluate(&"test".to_string(), &validators);
        let kinds: Vec<_> = errors.iter().map(|(kind, _)| kind.as_str()).collect();
        assert_eq!(kinds, ["email", "min_length", "required"]);

        let failing: Vec<_> = errors.failing().map(|k| k.as_str()).collect();
        assert_eq!(failing, ["email", "min_length"]);
    }
}
