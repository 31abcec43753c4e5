//! Observer primitives for UI binding.
//!
//! The editor exposes its state as observable values: observers subscribe,
//! receive change notifications, and read snapshots. Handlers run
//! synchronously on the emitting thread; the locks here only make
//! concurrent *reads* from render/UI observers safe, all mutation still
//! happens on the single owner thread.

use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Subscription handle for unsubscribing an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

type Handler<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Synchronous event dispatcher keyed by subscription id.
pub struct Dispatcher<E> {
    handlers: RwLock<HashMap<SubscriptionId, Handler<E>>>,
}

impl<E> Dispatcher<E> {
    /// Creates a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler and returns its subscription id.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.write().insert(id, Box::new(handler));
        id
    }

    /// Removes a handler. Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.write().remove(&id).is_some()
    }

    /// Invokes every registered handler with the event.
    pub fn emit(&self, event: &E) {
        let handlers = self.handlers.read();
        for handler in handlers.values() {
            handler(event);
        }
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl<E> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Publish-on-change value holder.
///
/// Holds one value, hands out cloned snapshots, and notifies subscribers
/// whenever the value is replaced. Updates are copy-on-write: `update`
/// clones the current value, applies the mutator, stores the result, and
/// publishes it.
pub struct Observable<T: Clone> {
    value: RwLock<T>,
    dispatcher: Dispatcher<T>,
}

impl<T: Clone> Observable<T> {
    /// Creates a holder with the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Returns a snapshot of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Reads the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        self.dispatcher.emit(&value);
    }

    /// Applies a copy-on-write update and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.value.read().clone();
        f(&mut next);
        self.set(next);
    }

    /// Registers a change handler and returns its subscription id.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.dispatcher.subscribe(handler)
    }

    /// Removes a change handler.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(id)
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.value.read())
            .field("subscribers", &self.dispatcher.subscriber_count())
            .finish()
    }
}
