use super::ValidatorKind;

/// A form member that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Member name (from `FormBuilder::field`).
    pub field_name: String,
    /// Failing validator kinds, in attachment order.
    pub failing: Vec<ValidatorKind>,
}

impl FieldError {
    /// Check whether a specific validator failed for this member.
    pub fn fails(&self, kind: &ValidatorKind) -> bool {
        self.failing.contains(kind)
    }
}

/// Result of validating every member of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All members passed validation.
    #[default]
    Valid,
    /// One or more members failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all members passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any member failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors, in declaration order.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Name of the first invalid member.
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|e| e.field_name.as_str())
    }
}

impl From<Vec<FieldError>> for ValidationResult {
    fn from(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }
}
