use std::collections::VecDeque;

/// Core queue state: the FIFO buffer plus the one-way closing flag.
///
/// This type carries no synchronization of its own. The lock that guards
/// it lives in [`crate::core::sync::SyncQueue`], which is the only place
/// that touches these operations.
pub struct Queue<T> {
    items: VecDeque<T>,
    closing: bool,
}

impl<T> Queue<T> {
    /// Create a new, empty, open queue
    pub(crate) fn new() -> Self {
        Self {
            items: VecDeque::new(),
            closing: false,
        }
    }

    /// Append an item to the tail. Rejected once the queue is closing.
    pub(crate) fn enqueue(&mut self, item: T) -> bool {
        if self.closing {
            return false;
        }
        self.items.push_back(item);
        // --post operation assertion
        assert!(!self.items.is_empty(), "Queue must be non-empty after enqueue");
        true
    }

    /// Remove and return the head item, if any
    pub(crate) fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Mark the queue as closing. Monotonic: once set it is never cleared,
    /// so calling this repeatedly is harmless.
    pub(crate) fn close(&mut self) {
        self.closing = true;
    }

    /// Whether closing has been signaled
    pub(crate) fn is_closing(&self) -> bool {
        self.closing
    }

    /// A queue is complete when it is closing and nothing is left to drain.
    /// Derived on demand rather than stored, so it can never disagree with
    /// the two fields it is computed from.
    pub(crate) fn is_complete(&self) -> bool {
        self.closing && self.items.is_empty()
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
