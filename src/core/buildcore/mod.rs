pub use crate::core::{
    log::{LogEntry, Logger, SafeLogger, State},
    queue::Queue,
    sync::{SafeSyncQueue, SyncQueue},
};
use std::sync::{Arc, Mutex};

/// Unified work queue with operation logging.
///
/// Composes a [`SyncQueue`] with a [`Logger`]: every public operation
/// goes through the queue first, then records what happened. The queue
/// lock and the logger lock are taken strictly in sequence, never
/// nested, so a slow logger cannot stall producers or consumers mid
/// queue operation.
pub struct WorkQueueSystem<T> {
    label: String,
    queue: SafeSyncQueue<T>,
    logger: SafeLogger<T>,
}

impl<T: Clone + Send + 'static> WorkQueueSystem<T> {
    /// Create a new labeled work queue system
    pub fn new(label: String) -> Self {
        Self {
            queue: Arc::new(SyncQueue::new()),
            logger: Arc::new(Mutex::new(Logger::new(label.clone()))),
            label,
        }
    }

    /// Push with logging. Returns whether the queue accepted the item.
    pub fn push(&self, item: T) -> bool {
        let accepted = self.queue.push(item.clone());
        let state = if accepted { State::Accepted } else { State::Rejected };

        // Depth is a snapshot taken after the push released the queue
        // lock; like len(), it may already be stale when recorded.
        let depth = self.queue.len();
        let mut logger = self.logger.lock().unwrap();
        logger.log("push", Some(item), state, depth);
        accepted
    }

    /// Blocking get with logging. `None` means the queue is complete
    /// and the consumer should terminate its loop.
    pub fn get(&self) -> Option<T> {
        let item = self.queue.get();
        let state = if item.is_some() { State::Delivered } else { State::Drained };

        let depth = self.queue.len();
        let mut logger = self.logger.lock().unwrap();
        logger.log("get", item.clone(), state, depth);
        item
    }

    /// Signal closure without waiting for the backlog to drain
    pub fn stop(&self) {
        self.queue.stop();
        let depth = self.queue.len();
        let mut logger = self.logger.lock().unwrap();
        logger.log("stop", None, State::Closing, depth);
    }

    /// Signal closure and block until consumers have drained the queue
    pub fn join(&self) {
        // Log before blocking: the Closing transition happens at call
        // time, the wait only observes the drain.
        {
            let mut logger = self.logger.lock().unwrap();
            logger.log("join", None, State::Closing, self.queue.len());
        }
        self.queue.join();
    }

    /// Get current queue state
    pub fn queue_state(&self) -> (usize, bool) {
        let len = self.queue.len();
        (len, len == 0)
    }

    /// Handle to the underlying synchronized queue
    pub fn queue(&self) -> SafeSyncQueue<T> {
        self.queue.clone()
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry<T>> {
        let logger = self.logger.lock().unwrap();
        logger.entries.clone()
    }

    /// Get the queue label
    pub fn label(&self) -> &str {
        &self.label
    }
}
