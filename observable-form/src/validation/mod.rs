//! Validators and the error state they produce.
//!
//! A [`Validator`] is a named predicate over a value. Running every
//! validator of a field against its current value yields an
//! [`ErrorState`], which answers whether a *specific* kind currently fails.
//!
//! # Example
//!
//! ```ignore
//! use observable_form::validation::{ErrorState, Validator, ValidatorKind};
//!
//! let validators = [Validator::required(), Validator::email()];
//! let errors = ErrorState::evaluate(&"test".to_string(), &validators);
//!
//! assert!(!errors[&ValidatorKind::REQUIRED]);
//! assert!(errors[&ValidatorKind::EMAIL]);
//! assert!(!errors.is_valid());
//! ```

mod errors;
mod kind;
mod result;
mod validator;

pub use errors::ErrorState;
pub use kind::ValidatorKind;
pub use result::{FieldError, ValidationResult};
pub use validator::{Blank, Validator};
