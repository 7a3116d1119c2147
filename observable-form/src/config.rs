//! Field and form configuration types.

/// When a field or form notifies its subscribers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotifyPolicy {
    /// Notify on every value write, even if nothing observable changed.
    #[default]
    Always,

    /// Notify only when the result changed.
    ///
    /// For a field this means the error state differs from the previous
    /// one. For a form it means the aggregate validity flipped.
    OnChange,
}

/// Per-field configuration.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    /// Label used in log output.
    pub name: Option<String>,

    /// Notification policy for value writes.
    pub notify: NotifyPolicy,
}

impl FieldConfig {
    /// Create a new config with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the notification policy.
    pub fn notify(mut self, policy: NotifyPolicy) -> Self {
        self.notify = policy;
        self
    }

    /// Only notify when the error state changes.
    pub fn notify_on_change(mut self) -> Self {
        self.notify = NotifyPolicy::OnChange;
        self
    }
}

/// Per-form configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Label used in log output.
    pub name: String,

    /// Policy for re-emitting member notifications.
    pub notify: NotifyPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: "Form".to_string(),
            notify: NotifyPolicy::Always,
        }
    }
}

impl FormConfig {
    /// Create a new config with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the notification policy.
    pub fn notify(mut self, policy: NotifyPolicy) -> Self {
        self.notify = policy;
        self
    }
}
