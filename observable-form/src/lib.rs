//! Reactive field validation.
//!
//! A [`Field`](field::Field) holds a value and a list of
//! [`Validator`](validation::Validator)s, and re-runs all of them
//! synchronously on every write so its [`ErrorState`](validation::ErrorState)
//! always matches the current value. A [`Form`](form::Form) groups named
//! fields, reports their combined validity and forwards their change
//! notifications.
//!
//! Everything runs on the calling thread; there are no background tasks.

pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod subscription;
pub mod validation;

mod sync;

pub use config::{FieldConfig, FormConfig, NotifyPolicy};
pub use error::{ConfigError, MemberError};
pub use field::{Field, FieldBuilder, FieldId};
pub use form::{Form, FormBuilder};

pub mod prelude {
    pub use crate::config::{FieldConfig, FormConfig, NotifyPolicy};
    pub use crate::error::{ConfigError, MemberError};
    pub use crate::event::{FieldEvent, FormEvent};
    pub use crate::field::{Field, FieldBuilder, FieldId};
    pub use crate::form::{Form, FormBuilder};
    pub use crate::subscription::SubscriptionId;
    pub use crate::validation::{
        Blank, ErrorState, FieldError, ValidationResult, Validator, ValidatorKind,
    };
}
