// Synchronous listener registry for in-process domain notifications.
//
// Purpose
// - Let any number of observers subscribe to an event raised by a sender (usually a service).
//
// Responsibilities
// - Deliver each emitted event to every listener registered at the moment of emission,
//   on the calling thread, before `emit` returns.
// - Allow listeners to be added and removed at any time, including from inside a listener.
//
// Boundaries
// - No queues, no background tasks. Delivery is a plain function call per listener.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener<S, E> = Arc<dyn Fn(&S, &E) + Send + Sync>;

pub struct EventListeners<S: ?Sized, E> {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(ListenerId, Listener<S, E>)>>,
}

impl<S: ?Sized, E> Default for EventListeners<S, E> {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            listeners: RwLock::new(Vec::new()),
        }
    }
}

impl<S: ?Sized, E> EventListeners<S, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&S, &E) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let listener: Listener<S, E> = Arc::new(listener);
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    /// Returns false when the id was never registered or was already removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut guard = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|(registered, _)| *registered != id);
        guard.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every listener once and returns how many were called.
    pub fn emit(&self, sender: &S, event: &E) -> usize {
        // Snapshot so listeners may (un)subscribe without deadlocking on the lock.
        let snapshot: Vec<Listener<S, E>> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in &snapshot {
            listener(sender, event);
        }
        snapshot.len()
    }
}
