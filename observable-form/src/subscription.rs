//! Change subscriptions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::sync;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__sub_{}", self.0)
    }
}

/// Type alias for a shared listener closure.
type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Ordered list of listeners for one event source.
pub(crate) struct Listeners<E> {
    entries: Mutex<Vec<(SubscriptionId, Listener<E>)>>,
}

impl<E> Listeners<E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn add<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let listener: Listener<E> = Arc::new(listener);
        sync::lock(&self.entries).push((id, listener));
        log::debug!("[subscription] added {}", id);
        id
    }

    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = sync::lock(&self.entries);
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != id);
        let removed = entries.len() != before;
        if removed {
            log::debug!("[subscription] removed {}", id);
        }
        removed
    }

    pub(crate) fn len(&self) -> usize {
        sync::lock(&self.entries).len()
    }

    /// Call every listener in subscription order.
    ///
    /// The list is copied before dispatch so listeners may subscribe,
    /// unsubscribe or write the source without deadlocking.
    pub(crate) fn emit(&self, event: &E) {
        let listeners: Vec<Listener<E>> = sync::lock(&self.entries)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        log::debug!("[subscription] dispatching to {} listener(s)", listeners.len());
        for listener in listeners {
            listener(event);
        }
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish()
    }
}
