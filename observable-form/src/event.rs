//! Change notifications emitted by fields and forms.

use crate::field::FieldId;

/// Emitted by a [`Field`](crate::field::Field) after a value write.
///
/// The field has already finished its validation pass when this is
/// delivered, so listeners can read `value()`/`errors()` and see the new
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEvent {
    /// The field that changed.
    pub field: FieldId,
    /// Validity after the write.
    pub is_valid: bool,
    /// Whether the error state differs from the one before the write.
    pub errors_changed: bool,
}

/// Emitted by a [`Form`](crate::form::Form) when one of its members changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEvent {
    /// Name of the member that changed.
    pub member: String,
    /// Id of the member field.
    pub field: FieldId,
    /// Aggregate form validity after the change.
    pub is_valid: bool,
}
