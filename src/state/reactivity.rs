// ============================================================================
// REACTIVITY - Subscriber lists for state change notifications
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback<E> = Rc<dyn Fn(&E)>;

/// Shared list of callbacks. Clones share the same list.
pub struct Subscribers<E> {
    callbacks: Rc<RefCell<Vec<Callback<E>>>>,
}

impl<E> Subscribers<E> {
    pub fn new() -> Self {
        Self {
            callbacks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&E) + 'static,
    {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify(&self, event: &E) {
        // Snapshot first: a callback may subscribe again
        let callbacks: Vec<Callback<E>> = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }
}

impl<E> Clone for Subscribers<E> {
    fn clone(&self) -> Self {
        Self {
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// At most one pending job; clones share the flag
#[derive(Clone, Default)]
pub struct PendingFlag {
    pending: Rc<RefCell<bool>>,
}

impl PendingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was pending yet and the caller should schedule
    pub fn claim(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        *self.pending.borrow_mut() = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clones_share_callbacks() {
        let subscribers: Subscribers<u32> = Subscribers::new();
        let total = Rc::new(Cell::new(0));

        let clone = subscribers.clone();
        let total_clone = total.clone();
        clone.subscribe(move |n| total_clone.set(total_clone.get() + n));

        subscribers.notify(&2);
        subscribers.notify(&3);
        assert_eq!(total.get(), 5);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn test_subscribe_during_notify() {
        let subscribers: Subscribers<()> = Subscribers::new();
        let inner = subscribers.clone();
        subscribers.subscribe(move |_| inner.subscribe(|_| {}));

        subscribers.notify(&());
        assert_eq!(subscribers.len(), 2);
    }

    #[test]
    fn test_pending_flag_coalesces_until_released() {
        let flag = PendingFlag::new();
        let shared = flag.clone();

        assert!(flag.claim());
        assert!(!flag.claim());
        assert!(!shared.claim());

        shared.release();
        assert!(flag.claim());
    }
}
