//! Explicit event subscriptions.
//!
//! Both views re-expose their backends' native interaction streams as
//! position-indexed callbacks. The registry here is the concrete
//! mechanism: an ordered list of boxed callbacks keyed by a monotonically
//! increasing id, with explicit unsubscription. Consumers hold a
//! [`Subscription`] token and hand it back to stop receiving events; there
//! is no global event bus and no implicit handler growth.

/// Handle returned by a subscribe call.
///
/// Pass it back to the owning registry's `unsubscribe` to detach the
/// callback. Tokens are never reused within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// An ordered collection of event callbacks.
///
/// Callbacks fire in subscription order. `T` is the event payload
/// (typically a sequence-position index).
pub struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(u64, Box<dyn FnMut(T)>)>,
}

impl<T: Copy> Subscribers<T> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback. Multiple independent subscribers are
    /// supported; each receives every emitted event until unsubscribed.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(T) + 'static,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        Subscription(id)
    }

    /// Detach a callback. Returns `false` if the subscription was already
    /// removed or belongs to another registry.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != subscription.0);
        self.entries.len() != before
    }

    /// Deliver `value` to every subscriber, in subscription order.
    pub fn emit(&mut self, value: T) {
        for (_, callback) in &mut self.entries {
            callback(value);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no live subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}
