use std::sync::{Arc, Condvar, Mutex};

use crate::core::queue::Queue;

/// Thread-safe shared handle to a synchronized queue
pub type SafeSyncQueue<T> = Arc<SyncQueue<T>>;

/// Blocking multi-producer/multi-consumer queue with a cooperative
/// shutdown protocol.
///
/// A single mutex guards both the FIFO buffer and the closing flag; the
/// condition variable blocks consumers in [`get`](SyncQueue::get) and the
/// thread waiting in [`join`](SyncQueue::join).
///
/// Lifecycle: the queue starts open. `stop` or `join` moves it to
/// draining, where pushes are rejected but already-enqueued items stay
/// consumable. Once drained it is complete, a terminal state: `get`
/// returns `None` immediately and `join` returns without blocking.
///
/// Shutdown is the only failure mode. `push` reports it as `false`,
/// `get` reports it as `None`; neither is an error, and nothing panics
/// for control flow.
pub struct SyncQueue<T> {
    state: Mutex<Queue<T>>,
    wakeup: Condvar,
}

impl<T> SyncQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Queue::new()),
            wakeup: Condvar::new(),
        }
    }

    /// Push an item onto the tail of the queue and wake one waiting
    /// consumer. Returns `false` without enqueuing if the queue is
    /// closing, so producers can detect shutdown from the result.
    pub fn push(&self, item: T) -> bool {
        let mut state = self.state.lock().unwrap();
        if !state.enqueue(item) {
            return false;
        }
        drop(state);

        // Exactly one item became available, so one waiter is enough.
        self.wakeup.notify_one();
        true
    }

    /// Block until an item is available and return it, or return `None`
    /// once the queue is complete (closing and drained).
    ///
    /// The completion predicate is checked both before and after the
    /// wait: the wait handles spurious wakeups, and the re-check handles
    /// a wakeup caused by closure rather than by a new item.
    pub fn get(&self) -> Option<T> {
        let mut state = self.state.lock().unwrap();
        if state.is_complete() {
            return None;
        }

        state = self
            .wakeup
            .wait_while(state, |q| q.is_empty() && !q.is_closing())
            .unwrap();

        if state.is_complete() {
            return None;
        }

        let item = state.dequeue();
        // Wake everything: other consumers may still have items to take,
        // and a thread blocked in join must re-test for emptiness.
        self.wakeup.notify_all();
        item
    }

    /// Mark the queue as closing and wake every waiter. Idempotent.
    ///
    /// Items already enqueued are not dropped; they remain available to
    /// `get` until consumed. Only future pushes are disabled.
    pub fn stop(&self) {
        let mut state = self.state.lock().unwrap();
        state.close();
        drop(state);

        self.wakeup.notify_all();
    }

    /// Mark the queue as closing and block until every remaining item
    /// has been consumed. Returns immediately if the queue is already
    /// empty.
    ///
    /// This lets a producer signal "no more work" and wait for the
    /// backlog to drain in one call.
    pub fn join(&self) {
        let mut state = self.state.lock().unwrap();
        state.close();
        // Consumers blocked on an empty queue are waiting for either an
        // item or closure; they must learn about the closure now.
        self.wakeup.notify_all();

        if state.is_empty() {
            return;
        }

        let _state = self.wakeup.wait_while(state, |q| !q.is_empty()).unwrap();
    }

    /// Snapshot of the current queue length. Stale as soon as it
    /// returns: the lock is released before the caller sees the value.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().len()
    }

    /// Snapshot emptiness check. Same staleness caveat as `len`.
    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().is_empty()
    }

    /// Whether the queue is complete: closing has been signaled and no
    /// items remain. Evaluated atomically under the lock.
    pub fn is_complete(&self) -> bool {
        self.state.lock().unwrap().is_complete()
    }
}

impl<T> Default for SyncQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SyncQueue<T> {
    /// Force the closing transition on teardown so any thread still
    /// blocked in `get` or `join` is woken before the storage goes away.
    fn drop(&mut self) {
        self.stop();
    }
}
