//! Forms: fixed, named groups of fields with aggregate validity.
//!
//! A form owns a handle to each member field and subscribes to it when
//! built. Whenever a member notifies, the form re-emits a [`FormEvent`] so a
//! UI layer can observe the form alone.
//!
//! # Example
//!
//! ```ignore
//! struct ProfileForm {
//!     name: Field<String>,
//!     email: Field<String>,
//!     form: Form,
//! }
//!
//! impl ProfileForm {
//!     fn new() -> Result<Self, ConfigError> {
//!         let name = Field::new(String::new(), [Validator::required()])?;
//!         let email = Field::new(String::new(), [Validator::required(), Validator::email()])?;
//!         let form = Form::builder()
//!             .field("name", &name)
//!             .field("email", &email)
//!             .build()?;
//!         Ok(Self { name, email, form })
//!     }
//! }
//! ```

mod member;

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use crate::config::{FormConfig, NotifyPolicy};
use crate::error::{ConfigError, MemberError};
use crate::event::{FieldEvent, FormEvent};
use crate::field::Field;
use crate::subscription::{Listeners, SubscriptionId};
use crate::validation::{ErrorState, FieldError, ValidationResult};

use member::{AnyField, Member};

/// State shared by all handles of one form.
struct FormShared {
    config: FormConfig,
    members: Vec<Member>,
    listeners: Listeners<FormEvent>,
    /// Aggregate validity as of the last member notification.
    last_valid: AtomicBool,
}

impl FormShared {
    fn is_valid(&self) -> bool {
        self.members.iter().all(|member| member.field.is_valid())
    }

    fn member_changed(&self, name: &str, event: &FieldEvent) {
        let is_valid = self.is_valid();
        let was_valid = self.last_valid.swap(is_valid, Ordering::SeqCst);

        log::trace!(
            "[form] {} member '{}' changed: valid={}",
            self.config.name,
            name,
            is_valid
        );

        if self.config.notify == NotifyPolicy::OnChange && was_valid == is_valid {
            return;
        }

        self.listeners.emit(&FormEvent {
            member: name.to_string(),
            field: event.field,
            is_valid,
        });
    }
}

impl Drop for FormShared {
    fn drop(&mut self) {
        for member in &self.members {
            member.field.unsubscribe(member.subscription);
        }
        log::debug!("[form] {} dropped", self.config.name);
    }
}

/// A fixed set of named fields whose validity is the conjunction of theirs.
///
/// Validity is never cached: [`is_valid`](Self::is_valid) reads every
/// member on each call. Members are fixed at construction.
///
/// `Form` is a handle; clones share members and subscribers. Member
/// subscriptions are removed when the last handle is dropped.
#[derive(Clone)]
pub struct Form {
    shared: Arc<FormShared>,
}

impl Form {
    /// Start building a form.
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// The form's log label.
    pub fn name(&self) -> &str {
        &self.shared.config.name
    }

    /// `true` if every member is valid. An empty form is valid.
    pub fn is_valid(&self) -> bool {
        self.shared.is_valid()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.shared.members.len()
    }

    /// `true` if the form has no members.
    pub fn is_empty(&self) -> bool {
        self.shared.members.is_empty()
    }

    /// Member names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shared.members.iter().map(|member| member.name.as_str())
    }

    /// Whether a member with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.member(name).is_some()
    }

    /// Get a typed handle to a member field.
    pub fn field<V: Clone + Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> Result<Field<V>, MemberError> {
        let member = self.member(name).ok_or_else(|| MemberError::missing(name))?;
        member
            .field
            .as_any()
            .downcast_ref::<Field<V>>()
            .cloned()
            .ok_or_else(|| MemberError::type_mismatch(name, std::any::type_name::<V>()))
    }

    /// Current error state of a member.
    pub fn errors(&self, name: &str) -> Option<ErrorState> {
        self.member(name).map(|member| member.field.errors())
    }

    /// Names of members that are currently invalid, in declaration order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.shared
            .members
            .iter()
            .filter(|member| !member.field.is_valid())
            .map(|member| member.name.as_str())
    }

    /// Collect the failing validators of every member.
    pub fn validate(&self) -> ValidationResult {
        self.shared
            .members
            .iter()
            .filter_map(|member| {
                let errors = member.field.errors();
                if errors.is_valid() {
                    return None;
                }
                Some(FieldError {
                    field_name: member.name.clone(),
                    failing: errors.failing().cloned().collect(),
                })
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Reset every member to its initial value.
    pub fn reset(&self) {
        for member in &self.shared.members {
            member.field.reset();
        }
    }

    /// Register a listener called whenever a member notifies.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&FormEvent) + Send + Sync + 'static,
    {
        self.shared.listeners.add(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.listeners.remove(id)
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.len()
    }

    fn member(&self, name: &str) -> Option<&Member> {
        self.shared
            .members
            .iter()
            .find(|member| member.name == name)
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.shared.config.name)
            .field("members", &self.names().collect::<Vec<_>>())
            .field("is_valid", &self.is_valid())
            .finish()
    }
}

/// Builder for a [`Form`].
///
/// Members keep their declaration order.
#[derive(Default)]
pub struct FormBuilder {
    config: FormConfig,
    members: Vec<(String, Box<dyn AnyField>)>,
}

impl FormBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. The form keeps its own handle to `field`.
    pub fn field<V: Clone + Send + Sync + 'static>(
        mut self,
        name: impl Into<String>,
        field: &Field<V>,
    ) -> Self {
        let field: Box<dyn AnyField> = Box::new(field.clone());
        self.members.push((name.into(), field));
        self
    }

    /// Set the log label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the re-emission policy.
    pub fn notify(mut self, policy: NotifyPolicy) -> Self {
        self.config.notify = policy;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the form and subscribe to every member.
    ///
    /// Fails if two members share a name.
    pub fn build(self) -> Result<Form, ConfigError> {
        let mut seen = HashSet::new();
        for (name, _) in &self.members {
            if !seen.insert(name.as_str()) {
                log::debug!("[form] rejecting duplicate member '{}'", name);
                return Err(ConfigError::duplicate_member(name.as_str()));
            }
        }

        let FormBuilder { config, members } = self;
        let shared = Arc::new_cyclic(|weak: &Weak<FormShared>| {
            let members: Vec<Member> = members
                .into_iter()
                .map(|(name, field)| {
                    let weak = weak.clone();
                    let member_name = name.clone();
                    let subscription = field.subscribe(Box::new(move |event: &FieldEvent| {
                        if let Some(form) = weak.upgrade() {
                            form.member_changed(&member_name, event);
                        }
                    }));
                    Member {
                        name,
                        field,
                        subscription,
                    }
                })
                .collect();
            let last_valid = members.iter().all(|member| member.field.is_valid());
            FormShared {
                config,
                members,
                listeners: Listeners::new(),
                last_valid: AtomicBool::new(last_valid),
            }
        });

        log::debug!(
            "[form] {} built with {} member(s)",
            shared.config.name,
            shared.members.len()
        );
        Ok(Form { shared })
    }
}
