//! Reactive field: a value, its validators and the derived error state.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::{FieldConfig, NotifyPolicy};
use crate::error::ConfigError;
use crate::event::FieldEvent;
use crate::subscription::{Listeners, SubscriptionId};
use crate::sync;
use crate::validation::{ErrorState, Validator, ValidatorKind};

/// Unique identifier for a Field instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Value and errors, always written together.
#[derive(Debug)]
struct FieldInner<V> {
    value: V,
    errors: ErrorState,
}

/// A value holder that keeps its validation state current.
///
/// Every write goes through [`set`](Self::set), [`update`](Self::update) or
/// [`reset`](Self::reset). Each one runs all validators against the new
/// value while holding the write lock, so a reader never sees a value paired
/// with errors computed for an older one. Subscribers are notified after the
/// lock is released, in subscription order.
///
/// `Field` is a handle: clones share the same state, the same validators
/// and the same subscribers.
///
/// Writes from several threads are each consistent, but the order their
/// notifications arrive in is not defined. Synchronise externally if that
/// matters. Validator predicates run under the write lock and must not read
/// the field they belong to.
///
/// # Example
///
/// ```ignore
/// let email = Field::new(String::new(), [Validator::required(), Validator::email()])?;
/// assert!(!email.is_valid());
///
/// email.set("test@gmail.com".to_string());
/// assert!(email.is_valid());
/// assert!(!email.errors()[&ValidatorKind::EMAIL]);
/// ```
pub struct Field<V> {
    id: FieldId,
    config: Arc<FieldConfig>,
    validators: Arc<[Validator<V>]>,
    initial: Arc<V>,
    inner: Arc<RwLock<FieldInner<V>>>,
    dirty: Arc<AtomicBool>,
    listeners: Arc<Listeners<FieldEvent>>,
}

impl<V: Clone> Field<V> {
    /// Create a field with an initial value and validators.
    ///
    /// Fails if two validators share a kind.
    pub fn new(
        value: V,
        validators: impl IntoIterator<Item = Validator<V>>,
    ) -> Result<Self, ConfigError> {
        Self::with_config(value, validators, FieldConfig::default())
    }

    /// Create a field with an explicit configuration.
    pub fn with_config(
        value: V,
        validators: impl IntoIterator<Item = Validator<V>>,
        config: FieldConfig,
    ) -> Result<Self, ConfigError> {
        let validators: Vec<Validator<V>> = validators.into_iter().collect();
        let mut seen = HashSet::new();
        for validator in &validators {
            if !seen.insert(validator.kind()) {
                log::debug!(
                    "[field] rejecting duplicate validator '{}'",
                    validator.kind()
                );
                return Err(ConfigError::duplicate_validator(validator.kind().clone()));
            }
        }
        Ok(Self::from_parts(value, validators, config))
    }

    /// Create a field without validators. It is always valid.
    pub fn unvalidated(value: V) -> Self {
        Self::from_parts(value, Vec::new(), FieldConfig::default())
    }

    /// Start building a field with an initial value.
    pub fn builder(value: V) -> FieldBuilder<V> {
        FieldBuilder::new(value)
    }

    fn from_parts(value: V, validators: Vec<Validator<V>>, config: FieldConfig) -> Self {
        let errors = ErrorState::evaluate(&value, &validators);
        let field = Self {
            id: FieldId::new(),
            config: Arc::new(config),
            validators: validators.into(),
            initial: Arc::new(value.clone()),
            inner: Arc::new(RwLock::new(FieldInner { value, errors })),
            dirty: Arc::new(AtomicBool::new(false)),
            listeners: Arc::new(Listeners::new()),
        };
        log::trace!(
            "[field] created {} ({}) with {} validator(s)",
            field.id,
            field.label(),
            field.validators.len()
        );
        field
    }

    /// Get a clone of the current value.
    pub fn value(&self) -> V {
        sync::read(&self.inner).value.clone()
    }

    /// Read the current value and its errors together.
    pub fn snapshot(&self) -> (V, ErrorState) {
        let inner = sync::read(&self.inner);
        (inner.value.clone(), inner.errors.clone())
    }

    /// Restore the initial value and clear the dirty flag.
    ///
    /// Revalidates and notifies like any other write.
    pub fn reset(&self) {
        let initial = V::clone(&self.initial);
        self.commit(|_| initial, false);
    }

    /// Modify a copy of the value, then revalidate and notify subscribers.
    ///
    /// The copy replaces the stored value only once validation has finished,
    /// so a panic in `f` leaves the previous value and errors in place. `f`
    /// runs under the field's write lock and must not read or write this
    /// field.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut V),
    {
        self.commit(
            |current| {
                let mut next = current.clone();
                f(&mut next);
                next
            },
            true,
        );
    }
}

impl<V> Field<V> {
    /// Get the unique ID for this field.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The configured label, if any.
    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    /// The notification policy.
    pub fn notify_policy(&self) -> NotifyPolicy {
        self.config.notify
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Run `f` against the current value without cloning it.
    ///
    /// `f` runs under the field's read lock and must not write this field.
    pub fn with_value<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&sync::read(&self.inner).value)
    }

    /// The current error state.
    pub fn errors(&self) -> ErrorState {
        sync::read(&self.inner).errors.clone()
    }

    /// Whether the validator of this kind currently fails.
    pub fn has_error(&self, kind: &ValidatorKind) -> bool {
        sync::read(&self.inner).errors.get(kind)
    }

    /// `true` if no validator currently fails.
    pub fn is_valid(&self) -> bool {
        sync::read(&self.inner).errors.is_valid()
    }

    /// Kinds of the attached validators, in attachment order.
    pub fn validator_kinds(&self) -> impl Iterator<Item = &ValidatorKind> {
        self.validators.iter().map(Validator::kind)
    }

    /// Whether a validator of this kind is attached.
    pub fn has_validator(&self, kind: &ValidatorKind) -> bool {
        self.validator_kinds().any(|k| k == kind)
    }

    /// Check if the value has been written since creation or the last
    /// [`mark_clean`](Self::mark_clean).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn mark_clean(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Whether two handles refer to the same field.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the value, revalidate and notify subscribers.
    pub fn set(&self, value: V) {
        self.commit(|_| value, true);
    }

    /// Compute the next value and its errors, then store both.
    ///
    /// Nothing is stored until `next` and every validator have returned.
    fn commit<F>(&self, next: F, dirty: bool)
    where
        F: FnOnce(&V) -> V,
    {
        let event = {
            let mut inner = sync::write(&self.inner);
            let value = next(&inner.value);
            let errors = ErrorState::evaluate(&value, &self.validators);
            let errors_changed = errors != inner.errors;
            *inner = FieldInner { value, errors };
            self.dirty.store(dirty, Ordering::SeqCst);
            FieldEvent {
                field: self.id,
                is_valid: inner.errors.is_valid(),
                errors_changed,
            }
        };

        log::trace!(
            "[field] {} ({}) revalidated: valid={}, changed={}",
            self.id,
            self.label(),
            event.is_valid,
            event.errors_changed
        );

        match self.config.notify {
            NotifyPolicy::Always => self.listeners.emit(&event),
            NotifyPolicy::OnChange if event.errors_changed => self.listeners.emit(&event),
            NotifyPolicy::OnChange => {}
        }
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a listener called after every notifying write.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&FieldEvent) + Send + Sync + 'static,
    {
        self.listeners.add(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn label(&self) -> &str {
        self.name().unwrap_or("unnamed")
    }
}

impl<V> Clone for Field<V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            config: Arc::clone(&self.config),
            validators: Arc::clone(&self.validators),
            initial: Arc::clone(&self.initial),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Field<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = sync::read(&self.inner);
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("name", &self.config.name)
            .field("value", &inner.value)
            .field("errors", &inner.errors)
            .finish()
    }
}

/// Builder for a [`Field`].
///
/// Unlike [`Field::new`], adding a validator whose kind is already present
/// replaces the earlier one in place.
pub struct FieldBuilder<V> {
    value: V,
    validators: Vec<Validator<V>>,
    config: FieldConfig,
}

impl<V: Clone> FieldBuilder<V> {
    /// Create a builder with an initial value.
    pub fn new(value: V) -> Self {
        Self {
            value,
            validators: Vec::new(),
            config: FieldConfig::default(),
        }
    }

    /// Attach a validator, replacing any existing one of the same kind.
    pub fn validator(mut self, validator: Validator<V>) -> Self {
        match self
            .validators
            .iter_mut()
            .find(|existing| existing.kind() == validator.kind())
        {
            Some(existing) => *existing = validator,
            None => self.validators.push(validator),
        }
        self
    }

    /// Set the log label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Set the notification policy.
    pub fn notify(mut self, policy: NotifyPolicy) -> Self {
        self.config.notify = policy;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the field.
    pub fn build(self) -> Field<V> {
        Field::from_parts(self.value, self.validators, self.config)
    }
}
