//! Change bus implementation.
//!
//! Synchronous and single-threaded: handlers run on the publishing thread,
//! in subscription order, before `publish` returns.

use uuid::Uuid;

use super::events::{ChangeEvent, ChangeSlice};

/// Subscription handle for unsubscribing from a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Type alias for change handler functions
type ChangeHandler = Box<dyn Fn(&ChangeEvent)>;

struct Subscription {
    id: SubscriptionId,
    slice: ChangeSlice,
    handler: ChangeHandler,
}

/// Per-slice publish/subscribe hub
#[derive(Default)]
pub struct ChangeBus {
    subscriptions: Vec<Subscription>,
}

impl ChangeBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every subscriber of its slice.
    ///
    /// Returns the number of handlers that were called.
    pub fn publish(&self, event: &ChangeEvent) -> usize {
        let slice = event.slice();
        let mut delivered = 0;
        for sub in self.subscriptions.iter().filter(|s| s.slice == slice) {
            (sub.handler)(event);
            delivered += 1;
        }
        tracing::trace!(%slice, delivered, "{}", event.description());
        delivered
    }

    /// Subscribe to one slice with a synchronous handler
    pub fn subscribe<F>(&mut self, slice: ChangeSlice, handler: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.subscriptions.push(Subscription {
            id,
            slice,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added for {}", id, slice);
        id
    }

    /// Unsubscribe
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        let removed = self.subscriptions.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Get the number of subscriptions on one slice
    pub fn slice_subscriber_count(&self, slice: ChangeSlice) -> usize {
        self.subscriptions.iter().filter(|s| s.slice == slice).count()
    }
}

impl std::fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
