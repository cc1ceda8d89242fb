use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Outcome of a queue operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum State {
    Accepted,  // push took the item
    Rejected,  // push refused: queue closing
    Delivered, // get returned an item
    Drained,   // get returned None: queue complete
    Closing,   // stop or join signaled closure
}

/// Log entry recording one queue operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub local_log_id: u64,
    pub queue_label: String,
    pub op: String,       // "push", "get", "stop" or "join"
    pub item: Option<T>,  // the item moved by the operation, if any
    pub state: State,
    pub depth: usize,     // queue length snapshot taken after the operation
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, queue_label: {}, op: {}, item: {:?}, state: {:?}, depth: {} }}",
            self.local_log_id, self.queue_label, self.op, self.item, self.state, self.depth,
        )
    }
}

/// Logger storing all entries for one queue
#[derive(Clone, Debug)]
pub struct Logger<T> {
    pub(crate) entries: Vec<LogEntry<T>>,
    queue_label: String,
}

impl<T: Clone> Logger<T> {
    pub fn new(queue_label: String) -> Self {
        Self {
            entries: Vec::new(),
            queue_label,
        }
    }

    /// Log an operation
    pub fn log(&mut self, op: &str, item: Option<T>, state: State, depth: usize) {
        // --- Negative-space assertion: op validity ---
        assert!(
            matches!(op, "push" | "get" | "stop" | "join"),
            "Operation must be push, get, stop or join"
        );

        // --- Negative-space assertion: state must match operation ---
        match op {
            "push" => assert!(
                matches!(state, State::Accepted | State::Rejected),
                "Push must be Accepted or Rejected"
            ),
            "get" => assert!(
                matches!(state, State::Delivered | State::Drained),
                "Get must be Delivered or Drained"
            ),
            _ => assert!(
                matches!(state, State::Closing),
                "Stop and join must record Closing"
            ),
        }

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        self.entries.push(LogEntry {
            local_log_id,
            queue_label: self.queue_label.clone(),
            op: op.into(),
            item,
            state,
            depth,
        });
    }
}

/// Append entries to an NDJSON file, one JSON object per line.
pub fn append_logs<T: Serialize>(log: &[LogEntry<T>], path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

/// Thread-safe wrapper
pub type SafeLogger<T> = Arc<Mutex<Logger<T>>>;
