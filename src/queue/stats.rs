//! Queue Statistics Ledger
//!
//! Counters tracked alongside each queue and published by the monitor
//! loop. The ledger is mutated under the queue's lock; snapshots taken
//! from it are plain values suitable for serialization and transport.

use serde::{Deserialize, Serialize};

/// Statistics record for a FIFO queue
///
/// `length` is a cached snapshot of the store size refreshed on length
/// queries, not a live-derived value. `monitoring` is true while the
/// monitor loop is actively running for this queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FifoStats {
    /// Queue identifier
    pub name: String,

    /// Items successfully enqueued since construction or last reset
    pub messages_received: u64,

    /// Items successfully dequeued since construction or last reset
    pub messages_sent: u64,

    /// Last-observed item count
    pub length: u64,

    /// Whether the queue has been closed
    pub closed: bool,

    /// Whether the monitor loop is running
    pub monitoring: bool,
}

impl FifoStats {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            messages_received: 0,
            messages_sent: 0,
            length: 0,
            closed: false,
            monitoring: false,
        }
    }

    /// Zero the counters and cached length, preserving identity and
    /// lifecycle flags
    pub(crate) fn reset(&mut self) {
        self.messages_received = 0;
        self.messages_sent = 0;
        self.length = 0;
    }
}
