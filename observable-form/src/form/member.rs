//! Type-erased access to form members.

use std::any::Any;

use crate::event::FieldEvent;
use crate::field::Field;
use crate::subscription::SubscriptionId;
use crate::validation::ErrorState;

/// Type alias for listeners passed through the erased interface.
pub(crate) type BoxedListener = Box<dyn Fn(&FieldEvent) + Send + Sync>;

/// The part of a [`Field`] a form needs, independent of the value type.
pub(crate) trait AnyField: Send + Sync {
    fn is_valid(&self) -> bool;
    fn errors(&self) -> ErrorState;
    fn reset(&self);
    fn subscribe(&self, listener: BoxedListener) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
    fn as_any(&self) -> &dyn Any;
}

impl<V: Clone + Send + Sync + 'static> AnyField for Field<V> {
    fn is_valid(&self) -> bool {
        Field::is_valid(self)
    }

    fn errors(&self) -> ErrorState {
        Field::errors(self)
    }

    fn reset(&self) {
        Field::reset(self);
    }

    fn subscribe(&self, listener: BoxedListener) -> SubscriptionId {
        Field::subscribe(self, listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        Field::unsubscribe(self, id)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A named member owned by a form.
pub(crate) struct Member {
    pub(crate) name: String,
    pub(crate) field: Box<dyn AnyField>,
    pub(crate) subscription: SubscriptionId,
}
