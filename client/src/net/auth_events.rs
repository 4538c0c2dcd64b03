//! Session-change fan-out.
//!
//! ARCHITECTURE
//! ============
//! Each subscriber owns the receiving half of an unbounded channel; the
//! broadcaster keeps the sending halves keyed by subscription id. Dropping
//! (or explicitly unsubscribing) the `AuthSubscription` removes the sender,
//! which ends the subscriber's stream.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use futures::channel::mpsc;

use super::types::AuthChange;

/// Stream of session changes handed to a subscriber.
pub type AuthChanges = mpsc::UnboundedReceiver<AuthChange>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    senders: Vec<(u64, mpsc::UnboundedSender<AuthChange>)>,
}

/// Registry of live change subscribers.
#[derive(Clone, Default)]
pub struct ChangeBroadcaster {
    inner: Arc<Mutex<Listeners>>,
}

impl ChangeBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    #[must_use]
    pub fn subscribe(&self) -> (AuthSubscription, AuthChanges) {
        let (tx, rx) = mpsc::unbounded();
        let mut listeners = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.senders.push((id, tx));
        (AuthSubscription { id, registry: Arc::downgrade(&self.inner) }, rx)
    }

    /// Deliver `change` to every subscriber, pruning closed channels.
    pub fn emit(&self, change: &AuthChange) {
        let mut listeners = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        listeners
            .senders
            .retain(|(_, tx)| tx.unbounded_send(change.clone()).is_ok());
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).senders.len()
    }
}

/// Handle that keeps a subscription registered.
pub struct AuthSubscription {
    id: u64,
    registry: Weak<Mutex<Listeners>>,
}

impl AuthSubscription {
    /// Unregister now. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut listeners = registry.lock().unwrap_or_else(PoisonError::into_inner);
            listeners.senders.retain(|(id, _)| *id != self.id);
        }
    }
}
